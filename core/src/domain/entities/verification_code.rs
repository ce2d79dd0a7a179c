//! Verification code entity for email-based authentication.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: i32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (15 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 15;

/// Use case a verification code is scoped to
///
/// `PasswordReset` is reserved by the data model; no endpoint currently
/// issues or consumes codes with that purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePurpose {
    EmailVerification,
    PasswordReset,
}

impl CodePurpose {
    /// Storage representation of the purpose tag
    pub fn as_str(&self) -> &'static str {
        match self {
            CodePurpose::EmailVerification => "email_verification",
            CodePurpose::PasswordReset => "password_reset",
        }
    }

    /// Parse the storage representation back into the enum
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "email_verification" => Some(CodePurpose::EmailVerification),
            "password_reset" => Some(CodePurpose::PasswordReset),
            _ => None,
        }
    }
}

/// Lifecycle state of a verification code, computed from stored fields.
///
/// Classification priority is fixed: a used code reports `Consumed` even
/// if it has also expired, and exhausted attempts win over expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStatus {
    /// Valid for consumption
    Active,
    /// Successfully used
    Consumed,
    /// Failed attempts reached the cap
    AttemptsExhausted,
    /// TTL elapsed
    Expired,
}

/// Verification code entity bound to an email address and a purpose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the verification code
    pub id: Uuid,

    /// Normalized email address this code was issued for
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Use case this code is scoped to
    pub purpose: CodePurpose,

    /// Number of failed verification attempts made
    pub attempt_count: i32,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub used: bool,

    /// Timestamp of successful use
    pub used_at: Option<DateTime<Utc>>,
}

impl VerificationCode {
    /// Creates a new verification code with a random 6-digit code
    ///
    /// # Arguments
    ///
    /// * `email` - Normalized email address the code is issued for
    /// * `purpose` - Use case the code is scoped to
    /// * `ttl_minutes` - Minutes until the code expires
    pub fn new(email: String, purpose: CodePurpose, ttl_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email,
            code: Self::generate_code(),
            purpose,
            attempt_count: 0,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            used: false,
            used_at: None,
        }
    }

    /// Generates a random 6-digit code using the OS CSPRNG
    ///
    /// Drawn uniformly from [100000, 999999], so the leading digit is
    /// never zero and the code is always exactly six digits long.
    fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(100_000..1_000_000);
        code.to_string()
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Classifies the lifecycle state of this code
    ///
    /// Priority: used, then attempts, then expiry.
    pub fn status(&self) -> CodeStatus {
        if self.used {
            CodeStatus::Consumed
        } else if self.attempt_count >= MAX_ATTEMPTS {
            CodeStatus::AttemptsExhausted
        } else if self.is_expired() {
            CodeStatus::Expired
        } else {
            CodeStatus::Active
        }
    }

    /// Whether the code is valid for consumption
    pub fn is_consumable(&self) -> bool {
        self.status() == CodeStatus::Active
    }

    /// Compares a submitted code against this record in constant time
    pub fn matches(&self, input_code: &str) -> bool {
        self.code.len() == input_code.len()
            && constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Records a failed verification attempt
    pub fn register_failed_attempt(&mut self) {
        self.attempt_count += 1;
    }

    /// Marks the code as successfully used
    pub fn consume(&mut self) {
        self.used = true;
        self.used_at = Some(Utc::now());
    }

    /// Gets the number of remaining verification attempts
    pub fn remaining_attempts(&self) -> i32 {
        (MAX_ATTEMPTS - self.attempt_count).max(0)
    }
}
