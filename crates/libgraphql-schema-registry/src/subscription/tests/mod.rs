mod graphql_subscription_tests;
mod test_doubles;
