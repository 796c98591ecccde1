use crate::subscription::GraphQLSubscription;
use crate::subscription::NotFoundSubscription;
use crate::subscription::Subscriber;
use crate::subscription::tests::test_doubles::AllowAllSubscription;

#[test]
fn default_topic_is_screaming_snake_case() {
    let subscriber = Subscriber::new("OnHello", "subscription OnHello { sayHello }");
    let handler = AllowAllSubscription;

    assert_eq!(handler.encode_topic(&subscriber, "sayHello"), "SAY_HELLO");
    assert_eq!(handler.encode_topic(&subscriber, "onPost2Updated"), "ON_POST2_UPDATED");
    assert_eq!(handler.encode_topic(&subscriber, "ticks"), "TICKS");
    assert_eq!(
        handler.decode_topic("onPostUpdated", &serde_json::json!({"id": 1})),
        "ON_POST_UPDATED",
    );
}

#[test]
fn default_resolve_passes_event_through() {
    let subscriber = Subscriber::new("OnHello", "subscription OnHello { sayHello }");
    let root = serde_json::json!({"message": "hi"});

    assert_eq!(AllowAllSubscription.resolve(root.clone(), &subscriber), root);
}

#[test]
fn not_found_rejects_everything() {
    let subscriber = Subscriber::new("OnHello", "subscription OnHello { nope }");

    assert!(NotFoundSubscription.is_not_found());
    assert!(!NotFoundSubscription.authorize(&subscriber));
    assert!(!NotFoundSubscription.filter(&subscriber, &serde_json::Value::Null));
    assert!(!AllowAllSubscription.is_not_found());
}
