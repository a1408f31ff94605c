use actix_session::Session;

pub fn get_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>("user_id").unwrap_or(None)
}

pub fn get_email(session: &Session) -> Result<String, String> {
    match session.get::<String>("email") {
        Ok(Some(email)) => Ok(email),
        Ok(None) => Err("No email in session".to_string()),
        Err(e) => Err(format!("Session error: {e}")),
    }
}

pub fn get_display_name(session: &Session) -> Result<String, String> {
    match session.get::<String>("display_name") {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err("No display name in session".to_string()),
        Err(e) => Err(format!("Session error: {e}")),
    }
}

/// Read and clear the one-shot flash message, if any.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
