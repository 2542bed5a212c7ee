use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use common::session::Session;
use common::workflow::UploadWorkflow;

use crate::api::ApiClient;
use crate::components::context::{api_of, session_of};

pub struct UploadPage {
    pub workflow: UploadWorkflow<File>,
    /// The file `<input>`, cleared after a report goes through.
    pub file_input_ref: NodeRef,
    pub session: Session,
    pub api: ApiClient,
}

impl UploadPage {
    pub fn new(ctx: &Context<Self>) -> Self {
        Self {
            workflow: UploadWorkflow::new(),
            file_input_ref: NodeRef::default(),
            session: session_of(ctx),
            api: api_of(ctx),
        }
    }

    pub fn reset_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
