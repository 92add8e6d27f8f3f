use crate::api::Credentials;

pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Please enter your username".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
