//! Error-to-exit-code mapping.

use santa_core::constants::exit_codes;
use santa_core::generator::AssignError;
use santa_core::participant::RosterError;

/// Map an application error to a process exit code.
///
/// Downcasts through `anyhow` context layers to find the typed cause.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(assign) = err.downcast_ref::<AssignError>() {
        return match assign {
            AssignError::InsufficientParticipants(_) => exit_codes::ERROR_ROSTER,
            AssignError::Exhausted { .. } => exit_codes::ERROR_EXHAUSTED,
            AssignError::Cancelled { .. } => exit_codes::ERROR_CANCELED,
        };
    }
    if err.downcast_ref::<RosterError>().is_some() {
        return exit_codes::ERROR_ROSTER;
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_error_codes() {
        let err = anyhow::Error::new(AssignError::Exhausted { attempts: 5 });
        assert_eq!(exit_code(&err), 2);
        let err = anyhow::Error::new(AssignError::InsufficientParticipants(1));
        assert_eq!(exit_code(&err), 3);
        let err = anyhow::Error::new(AssignError::Cancelled { attempts: 9 });
        assert_eq!(exit_code(&err), 130);
    }

    #[test]
    fn codes_survive_context() {
        let err = anyhow::Error::new(AssignError::Exhausted { attempts: 5 })
            .context("while generating");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn unknown_error_is_generic() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }
}
