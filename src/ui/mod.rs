use anyhow::Result;
use inquire::InquireError;

mod style;
mod typing;

pub use style::Style;
pub use typing::TypingIndicator;

/// Ctrl+C or Escape at an `inquire` prompt.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive step, treating a cancelled prompt as a clean exit.
///
/// Any other error is returned unchanged.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    f().or_else(|e| {
        if e.downcast_ref::<InquireError>()
            .is_some_and(is_prompt_cancelled)
        {
            println!();
            Ok(())
        } else {
            Err(e)
        }
    })
}
