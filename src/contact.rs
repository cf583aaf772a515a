use std::rc::Rc;

use folio_core::contact::{query_url, ACCEPT_JSON, CONTACT_FORM_ID};
use folio_core::{ContactReply, FormMethod, SubmitError, SubmitGate, SubmitOutcome};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::{Request, Response};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlFormElement, UrlSearchParams, Window};

use crate::dom::{self, js_err};
use crate::page_runtime;

type Notify = Box<dyn Fn(&str)>;

pub(crate) struct ContactSubmitter {
    form: HtmlFormElement,
    notify: Notify,
    gate: SubmitGate,
}

impl ContactSubmitter {
    /// Binds `#contact-form`; notices go to `window.alert`.
    pub(crate) fn attach(document: &Document, window: &Window) -> Option<Rc<Self>> {
        let window = window.clone();
        Self::attach_with(
            document,
            Box::new(move |notice| {
                let _ = window.alert_with_message(notice);
            }),
        )
    }

    pub(crate) fn attach_with(document: &Document, notify: Notify) -> Option<Rc<Self>> {
        let form = dom::by_id(document, CONTACT_FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        Some(Rc::new(Self {
            form,
            notify,
            gate: SubmitGate::new(),
        }))
    }

    pub(crate) fn listen(self: &Rc<Self>) -> EventListener {
        let submitter = Rc::clone(self);
        EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let submitter = Rc::clone(&submitter);
                spawn_local(async move {
                    submitter.submit().await;
                });
            },
        )
    }

    pub(crate) async fn submit(&self) -> Option<SubmitOutcome> {
        if let Err(err) = self.gate.try_begin() {
            gloo::console::warn!("contact: ignored", err.to_string());
            return None;
        }
        let (outcome, rejected) = match self.send().await {
            Ok(response) => {
                let outcome = SubmitOutcome::from_status(response.status());
                let rejected = (!outcome.is_sent()).then_some(response);
                (outcome, rejected)
            }
            Err(err) => (SubmitOutcome::Failed(err), None),
        };
        self.conclude(&outcome);
        // Error body is read after the form is usable again.
        if let Some(response) = rejected {
            log_reply(response).await;
        }
        Some(outcome)
    }

    /// Releases the gate, then tells the visitor and applies the outcome to the form.
    fn conclude(&self, outcome: &SubmitOutcome) {
        self.gate.finish();
        match outcome {
            SubmitOutcome::Sent => gloo::console::log!("contact: sent"),
            SubmitOutcome::Failed(err) => gloo::console::warn!("contact: failed", err.to_string()),
        }
        (self.notify)(outcome.notice());
        apply_outcome(&self.form, outcome);
    }

    async fn send(&self) -> Result<Response, SubmitError> {
        let action = self.form.action();
        let fields = FormData::new_with_form(&self.form)
            .map_err(|err| SubmitError::Transport(js_err(err)))?;
        let request = match FormMethod::parse(&self.form.method()) {
            FormMethod::Post => Request::post(&action)
                .header("Accept", ACCEPT_JSON)
                .body(fields)
                .map_err(|err| SubmitError::Transport(err.to_string()))?,
            FormMethod::Get => {
                let query = UrlSearchParams::new_with_str_sequence_sequence(&fields)
                    .map_err(|err| SubmitError::Transport(js_err(err)))?;
                let url = query_url(&action, &String::from(query.to_string()));
                Request::get(&url)
                    .header("Accept", ACCEPT_JSON)
                    .build()
                    .map_err(|err| SubmitError::Transport(err.to_string()))?
            }
        };
        request
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))
    }

}

/// Clears the fields after a successful send. A failure keeps what was typed.
pub(crate) fn apply_outcome(form: &HtmlFormElement, outcome: &SubmitOutcome) {
    if outcome.clears_form() {
        form.reset();
    }
}

async fn log_reply(response: Response) {
    let Ok(reply) = response.json::<ContactReply>().await else {
        return;
    };
    if let Some(summary) = reply.summary() {
        gloo::console::warn!("contact: endpoint said", summary);
    }
}

pub(crate) fn install(document: &Document, window: &Window) -> Result<(), String> {
    let Some(submitter) = ContactSubmitter::attach(document, window) else {
        return Ok(());
    };
    page_runtime::retain(submitter.listen());
    Ok(())
}
