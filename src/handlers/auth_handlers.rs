use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::take_flash;
use crate::auth::{csrf, password, rate_limit::RateLimiter, validate};
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::user;
use crate::templates_structs::{APP_NAME, LoginTemplate, SignupTemplate};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct SignupForm {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already logged in, redirect to dashboard
    if session.get::<i64>("user_id").unwrap_or(None).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let flash = take_flash(&session);
    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        flash,
        app_name: APP_NAME,
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or_else(|| std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        let csrf_token = csrf::get_or_create_token(&session);
        let tmpl = LoginTemplate {
            error: Some("Too many failed login attempts. Please try again later.".to_string()),
            flash: None,
            app_name: APP_NAME,
            csrf_token,
        };
        return render(tmpl);
    }

    let found = user::find_by_email(&pool, &form.email).await?;

    match found {
        Some(u) if password::verify_password(&form.password, &u.password).unwrap_or(false) => {
            limiter.clear(ip);

            let _ = session.insert("user_id", u.id);
            let _ = session.insert("email", &u.email);
            let _ = session.insert("display_name", &u.display_name);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        _ => {
            // Same message for unknown email and wrong password
            limiter.record_failure(ip);
            let csrf_token = csrf::get_or_create_token(&session);
            let tmpl = LoginTemplate {
                error: Some("Invalid email or password".to_string()),
                flash: None,
                app_name: APP_NAME,
                csrf_token,
            };
            render(tmpl)
        }
    }
}

pub async fn signup_page(session: Session) -> Result<HttpResponse, AppError> {
    if session.get::<i64>("user_id").unwrap_or(None).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = SignupTemplate {
        errors: vec![],
        email: String::new(),
        display_name: String::new(),
        app_name: APP_NAME,
        csrf_token,
    };
    render(tmpl)
}

pub async fn signup_submit(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_display_name(&form.display_name));
    errors.extend(validate::validate_email(&form.email));
    errors.extend(validate::validate_password(&form.password));
    if form.password != form.confirm_password {
        errors.push("Passwords do not match".to_string());
    }
    if errors.is_empty() && user::email_taken(&pool, &form.email).await? {
        errors.push("An account with this email already exists".to_string());
    }

    if !errors.is_empty() {
        let csrf_token = csrf::get_or_create_token(&session);
        let tmpl = SignupTemplate {
            errors,
            email: form.email.clone(),
            display_name: form.display_name.clone(),
            app_name: APP_NAME,
            csrf_token,
        };
        return render(tmpl);
    }

    let hashed = password::hash_password(&form.password).map_err(AppError::Hash)?;
    let new_user = user::NewUser {
        email: form.email.clone(),
        password: hashed,
        display_name: form.display_name.trim().to_string(),
    };
    let user_id = user::create(&pool, &new_user).await?;

    let details = serde_json::json!({
        "email": new_user.email,
        "summary": "Account created"
    });
    let _ = crate::audit::log(&pool, user_id, "user.signed_up", "user", user_id, details).await;

    let _ = session.insert("flash", "Account created. You can sign in now.");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
