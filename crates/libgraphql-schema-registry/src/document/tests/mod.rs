mod document_tests;
mod serialization_tests;
mod type_extension_tests;
