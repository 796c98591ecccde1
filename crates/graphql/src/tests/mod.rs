mod schema_files_tests;
