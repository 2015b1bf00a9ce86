//! Headless submission flow for the auth forms.
//!
//! A submit attempt moves through: idle, validating, then either back to
//! idle with field errors, or submitting, and from there back to idle on
//! failure or to a terminal navigated state on success. The flow functions
//! here drive that machine with injected collaborators so the whole thing
//! runs without a browser.

use super::auth_client::{AuthClient, SignInRequest, SignUpRequest};
use super::validation::{FieldErrors, SignInInput, SignUpInput};

/// Where the identity service sends the client, and where we navigate after
/// a successful submission
pub const CALLBACK_TARGET: &str = "/";

/// Shown when sign-in fails and the service provided no message
pub const SIGN_IN_FALLBACK_ERROR: &str = "Failed to sign in";

/// Shown when sign-up fails and the service provided no message
pub const SIGN_UP_FALLBACK_ERROR: &str = "Failed to sign up";

/// Transient user-facing feedback collaborator (toast in the real UI)
pub trait Notifier {
    fn error(&self, message: &str);
}

/// Client-side redirect collaborator
pub trait Navigator {
    fn navigate(&self, path: &str);
}

// `leptos_router::use_navigate` hands back an opaque closure; accepting any
// `Fn(&str)` lets it plug in without a wrapper type.
impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Validation failed; no request was made. The form stays editable and
    /// the errors render inline.
    Invalid(FieldErrors),
    /// The collaborator rejected the request; the message has already gone
    /// to the notifier and the form stays editable.
    Failed,
    /// The collaborator accepted; the navigator has been invoked.
    Succeeded,
}

/// Submission-in-progress flag gating the submit control.
///
/// This is a UI affordance, not mutual exclusion: it stops the double-click
/// double-submit, nothing stronger. No idempotency exists at this layer.
pub trait SubmitGate {
    fn is_pending(&self) -> bool;
    fn set_pending(&self, pending: bool);

    /// Arm the gate. Returns false if a submission is already in flight,
    /// in which case the caller must not start another one.
    fn try_begin(&self) -> bool {
        if self.is_pending() {
            false
        } else {
            self.set_pending(true);
            true
        }
    }

    /// Re-arm after the in-flight submission completed or failed
    fn finish(&self) {
        self.set_pending(false);
    }
}

impl SubmitGate for std::cell::Cell<bool> {
    fn is_pending(&self) -> bool {
        self.get()
    }

    fn set_pending(&self, pending: bool) {
        self.set(pending);
    }
}

/// Validate and submit the sign-in form. Exactly one request per call.
pub async fn submit_sign_in<C, N, V>(
    input: &SignInInput,
    client: &C,
    notifier: &N,
    navigator: &V,
) -> FormOutcome
where
    C: AuthClient,
    N: Notifier,
    V: Navigator,
{
    if let Err(errors) = input.validate() {
        return FormOutcome::Invalid(errors);
    }

    let request = SignInRequest::new(input, CALLBACK_TARGET);
    match client.sign_in(&request).await {
        Ok(()) => {
            navigator.navigate(CALLBACK_TARGET);
            FormOutcome::Succeeded
        }
        Err(err) => {
            notifier.error(err.message.as_deref().unwrap_or(SIGN_IN_FALLBACK_ERROR));
            FormOutcome::Failed
        }
    }
}

/// Validate and submit the sign-up form. Exactly one request per call.
pub async fn submit_sign_up<C, N, V>(
    input: &SignUpInput,
    client: &C,
    notifier: &N,
    navigator: &V,
) -> FormOutcome
where
    C: AuthClient,
    N: Notifier,
    V: Navigator,
{
    if let Err(errors) = input.validate() {
        return FormOutcome::Invalid(errors);
    }

    let request = SignUpRequest::new(input, CALLBACK_TARGET);
    match client.sign_up(&request).await {
        Ok(()) => {
            navigator.navigate(CALLBACK_TARGET);
            FormOutcome::Succeeded
        }
        Err(err) => {
            notifier.error(err.message.as_deref().unwrap_or(SIGN_UP_FALLBACK_ERROR));
            FormOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth_client::SubmitError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Records every request and answers with a canned response
    struct MockAuthClient {
        response: RefCell<Result<(), SubmitError>>,
        sign_in_calls: RefCell<Vec<SignInRequest>>,
        sign_up_calls: RefCell<Vec<SignUpRequest>>,
    }

    impl MockAuthClient {
        fn responding(response: Result<(), SubmitError>) -> Self {
            Self {
                response: RefCell::new(response),
                sign_in_calls: RefCell::new(Vec::new()),
                sign_up_calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.sign_in_calls.borrow().len() + self.sign_up_calls.borrow().len()
        }
    }

    impl AuthClient for MockAuthClient {
        async fn sign_in(&self, request: &SignInRequest) -> Result<(), SubmitError> {
            self.sign_in_calls.borrow_mut().push(request.clone());
            self.response.borrow().clone()
        }

        async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SubmitError> {
            self.sign_up_calls.borrow_mut().push(request.clone());
            self.response.borrow().clone()
        }
    }

    #[derive(Default)]
    struct MockNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for MockNotifier {
        fn error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct MockNavigator {
        paths: RefCell<Vec<String>>,
    }

    impl Navigator for MockNavigator {
        fn navigate(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_string());
        }
    }

    fn valid_sign_in() -> SignInInput {
        SignInInput {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_invalid_input_never_calls_collaborator() {
        let client = MockAuthClient::responding(Ok(()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        let input = SignInInput {
            email: "".to_string(),
            password: "secret".to_string(),
        };
        let outcome = block_on(submit_sign_in(&input, &client, &notifier, &navigator));

        match outcome {
            FormOutcome::Invalid(errors) => assert!(errors.email.is_some()),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(client.call_count(), 0);
        assert!(navigator.paths.borrow().is_empty());
        // Validation errors render inline, never as a toast
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_short_password_never_calls_collaborator() {
        let client = MockAuthClient::responding(Ok(()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        let input = SignInInput {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
        };
        let outcome = block_on(submit_sign_in(&input, &client, &notifier, &navigator));

        assert!(matches!(outcome, FormOutcome::Invalid(_)));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_empty_name_blocks_sign_up_submission() {
        let client = MockAuthClient::responding(Ok(()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        let input = SignUpInput {
            name: "".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let outcome = block_on(submit_sign_up(&input, &client, &notifier, &navigator));

        match outcome {
            FormOutcome::Invalid(errors) => assert!(errors.name.is_some()),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_success_navigates_to_root_exactly_once() {
        let client = MockAuthClient::responding(Ok(()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        let outcome = block_on(submit_sign_in(
            &valid_sign_in(),
            &client,
            &notifier,
            &navigator,
        ));

        assert_eq!(outcome, FormOutcome::Succeeded);
        assert_eq!(*navigator.paths.borrow(), vec!["/".to_string()]);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn test_collaborator_receives_input_and_callback_target() {
        let client = MockAuthClient::responding(Ok(()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        block_on(submit_sign_in(
            &valid_sign_in(),
            &client,
            &notifier,
            &navigator,
        ));

        let calls = client.sign_in_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "a@b.com");
        assert_eq!(calls[0].password, "secret");
        assert_eq!(calls[0].callback_url, "/");
    }

    #[test]
    fn test_failure_notifies_with_service_message() {
        let client =
            MockAuthClient::responding(Err(SubmitError::new("Invalid email or password")));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        let outcome = block_on(submit_sign_in(
            &valid_sign_in(),
            &client,
            &notifier,
            &navigator,
        ));

        assert_eq!(outcome, FormOutcome::Failed);
        assert_eq!(
            *notifier.messages.borrow(),
            vec!["Invalid email or password".to_string()]
        );
        assert!(navigator.paths.borrow().is_empty());
    }

    #[test]
    fn test_failure_without_message_uses_sign_in_fallback() {
        let client = MockAuthClient::responding(Err(SubmitError::unknown()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        block_on(submit_sign_in(
            &valid_sign_in(),
            &client,
            &notifier,
            &navigator,
        ));

        assert_eq!(
            *notifier.messages.borrow(),
            vec![SIGN_IN_FALLBACK_ERROR.to_string()]
        );
    }

    #[test]
    fn test_failure_without_message_uses_sign_up_fallback() {
        let client = MockAuthClient::responding(Err(SubmitError::unknown()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();

        let input = SignUpInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "lovelace".to_string(),
        };
        block_on(submit_sign_up(&input, &client, &notifier, &navigator));

        assert_eq!(
            *notifier.messages.borrow(),
            vec![SIGN_UP_FALLBACK_ERROR.to_string()]
        );
    }

    #[test]
    fn test_closure_satisfies_navigator() {
        let visited = RefCell::new(Vec::new());
        let navigate = |path: &str| visited.borrow_mut().push(path.to_string());
        Navigator::navigate(&navigate, "/");
        assert_eq!(*visited.borrow(), vec!["/".to_string()]);
    }

    #[test]
    fn test_gate_blocks_second_submit_while_pending() {
        let gate = Cell::new(false);

        assert!(gate.try_begin());
        // Second submit while the first is in flight must be a no-op
        assert!(!gate.try_begin());

        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn test_gated_flow_issues_single_call() {
        let client = MockAuthClient::responding(Ok(()));
        let notifier = MockNotifier::default();
        let navigator = MockNavigator::default();
        let gate = Cell::new(false);
        let input = valid_sign_in();

        // First submit event arms the gate and fires the request
        assert!(gate.try_begin());
        block_on(submit_sign_in(&input, &client, &notifier, &navigator));

        // Second submit event arrives before the first completes
        assert!(!gate.try_begin());
        assert_eq!(client.call_count(), 1);

        gate.finish();
        assert!(!gate.is_pending());
    }
}
