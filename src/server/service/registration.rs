//! Two-phase account registration workflow.
//!
//! Phase 1 (`request_registration`) validates the requested identity, builds
//! the complete not-yet-created account (hashed password, unique API key,
//! resolved role), seals it into a 7-day activation token, and mails the
//! activation link. No account row is written.
//!
//! Phase 2 (`activate`) verifies the token and materializes the account. The
//! store's unique constraints are the only guard against the identity being
//! claimed between the two phases; a losing create surfaces as a validation
//! failure, as does replaying an already-consumed token.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use url::Url;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    mail::EmailClient,
    model::{
        account::{Account, NewAccountParam, PendingAccount, RegisterRequestParam},
        role,
    },
    service::{password, token::TokenService},
    util::api_key::generate_api_key,
};

/// Subject line of the activation email.
const ACTIVATION_MAIL_SUBJECT: &str = "Activate your account";

/// Service orchestrating the two-phase registration workflow.
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mail: &'a EmailClient,
    app_url: &'a Url,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service for activation tokens
    /// - `mail` - Mail client for the activation email
    /// - `app_url` - Application base URL for the activation link
    ///
    /// # Returns
    /// - `RegistrationService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        mail: &'a EmailClient,
        app_url: &'a Url,
    ) -> Self {
        Self {
            db,
            tokens,
            mail,
            app_url,
        }
    }

    /// Handles a phase-1 registration request.
    ///
    /// Checks that neither the login nor the email is taken, generates a
    /// collision-free API key, hashes the password, mints the activation
    /// token, and dispatches the activation email. Deliberately writes no
    /// account row - creation is deferred to activation so unverified signups
    /// never occupy the identity namespace.
    ///
    /// # Arguments
    /// - `param` - Requested login, email, password, and role flag
    ///
    /// # Returns
    /// - `Ok(())` - Activation email dispatched
    /// - `Err(AppError::AuthErr(IdentityTaken))` - Login or email already in use
    /// - `Err(AppError::AuthErr(MailDispatch))` - Mail API rejected the message
    /// - `Err(AppError)` - Database, hashing, or signing failure
    #[tracing::instrument(
        name = "Request account registration",
        skip(self, param),
        fields(login = %param.login)
    )]
    pub async fn request_registration(&self, param: RegisterRequestParam) -> Result<(), AppError> {
        let account_repo = AccountRepository::new(self.db);

        let existing = account_repo
            .find_by_login_or_email(&param.login, &param.email)
            .await?;
        if existing.is_some() {
            return Err(AuthError::IdentityTaken.into());
        }

        let api_key = self.unique_api_key(generate_api_key).await?;
        let hash = password::compute_password_hash(param.password).await?;

        let pending = PendingAccount {
            login: param.login,
            email: param.email,
            api_key,
            hash,
            role_id: role::signup_role_id(param.want_to_be_operator),
        };

        let token = self.tokens.sign_activation(&pending, Utc::now())?;
        let link = activation_link(self.app_url, &token);

        self.mail
            .send_email(
                &pending.email,
                ACTIVATION_MAIL_SUBJECT,
                &activation_html_body(&link),
                &activation_text_body(&link),
            )
            .await
            .map_err(AuthError::MailDispatch)?;

        tracing::info!("Activation email dispatched");

        Ok(())
    }

    /// Finds an API key not yet present in the store.
    ///
    /// Draws candidates from `generate` and queries the store for each one
    /// until an unused key turns up. The loop is unbounded: every collision
    /// regenerates, no backoff, one store round-trip per attempt. Collisions
    /// over a 32-character alphanumeric space are expected to be rare.
    ///
    /// # Arguments
    /// - `generate` - Candidate key source
    ///
    /// # Returns
    /// - `Ok(String)` - Key reported unused by the store
    /// - `Err(DbErr)` - Database error while checking a candidate
    pub async fn unique_api_key<F>(&self, mut generate: F) -> Result<String, DbErr>
    where
        F: FnMut() -> String,
    {
        let account_repo = AccountRepository::new(self.db);

        loop {
            let candidate = generate();
            if !account_repo.api_key_in_use(&candidate).await? {
                return Ok(candidate);
            }
        }
    }

    /// Handles phase-2 activation.
    ///
    /// Verifies the activation token and creates the account it carries.
    /// Replaying a consumed token attempts a second create and fails on the
    /// unique constraint exactly like a lost phase-1/phase-2 race - the two
    /// cases are indistinguishable by design.
    ///
    /// # Arguments
    /// - `token` - Activation token from the emailed link
    ///
    /// # Returns
    /// - `Ok(Account)` - The newly created account
    /// - `Err(AppError::AuthErr(UnauthorizedActivation))` - Token undecodable or expired
    /// - `Err(AppError::AuthErr(AccountValidation))` - Unique constraint rejected the create
    /// - `Err(AppError)` - Other database failure
    #[tracing::instrument(name = "Activate account", skip(self, token))]
    pub async fn activate(&self, token: &str) -> Result<Account, AppError> {
        let claims = self.tokens.decode_activation(token)?;

        let account_repo = AccountRepository::new(self.db);
        let account = account_repo
            .create(NewAccountParam {
                login: claims.login,
                email: claims.email,
                api_key: claims.api_key,
                hash: claims.hash,
                role_id: claims.role_id,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::AuthErr(AuthError::AccountValidation(err))
                }
                _ => AppError::DbErr(err),
            })?;

        tracing::info!(account_id = account.id, "Account created");

        Ok(account)
    }
}

fn activation_link(app_url: &Url, token: &str) -> Url {
    let mut link = app_url.clone();
    link.set_path("/auth/activation");
    link.set_query(Some(&format!("token={}", token)));
    link
}

fn activation_html_body(link: &Url) -> String {
    format!(
        "<p>Welcome to Atelier!</p>\
         <p>Click <a href=\"{}\">here</a> to activate your account. \
         The link stays valid for 7 days.</p>",
        link
    )
}

fn activation_text_body(link: &Url) -> String {
    format!(
        "Welcome to Atelier!\nVisit {} to activate your account. \
         The link stays valid for 7 days.",
        link
    )
}
