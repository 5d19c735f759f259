//! Component state for the churn form.

use common::controller::FormController;

/// Main state container for the `ChurnForm` component.
///
/// The form values, the last prediction and the loading flag all live in the
/// `FormController`; the component only mutates them through its operations.
pub struct ChurnForm {
    pub controller: FormController,
}

impl ChurnForm {
    pub fn new() -> Self {
        Self {
            controller: FormController::new(),
        }
    }
}
