//! Business services containing domain logic and use cases.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    Clock, CodeGenerator, MailServiceTrait, SecureCodeGenerator, SendCodeResult, SystemClock,
    VerificationEmail, VerificationService, VerificationServiceConfig, VerifyCodeResult,
};
