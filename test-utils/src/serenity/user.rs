//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// The avatar hash is padded to 32 characters (Discord's hash format) when shorter.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `avatar` - Optional avatar hash
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "tester", Some("abc123"));
/// assert_eq!(user.name, "tester");
/// ```
pub fn create_test_user(user_id: u64, name: &str, avatar: Option<&str>) -> User {
    let formatted_avatar = avatar.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": null,
        "avatar": formatted_avatar,
        "bot": false,
        "public_flags": 0,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
