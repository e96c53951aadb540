//! Form adapter
//!
//! Owns the DOM elements of the health form and connects them to the
//! engine. The engine itself never touches the page; this is the only code
//! that reads field values or writes the results panel.

use crate::config::{AdapterConfig, FieldIds};
use crate::error::AdapterError;
use nutriplan_shared::{recommend, render_outcome, Outcome, RawInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;
use tracing::{debug, error, info};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
};

fn dom_error(err: JsValue) -> AdapterError {
    AdapterError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, AdapterError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AdapterError::MissingElement(id.to_string()))
}

/// A form control whose current value can be read
enum FormControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl FormControl {
    fn lookup(document: &Document, id: &str) -> Result<Self, AdapterError> {
        let element = element_by_id(document, id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(FormControl::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Ok(FormControl::Select(select)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(FormControl::TextArea)
            .map_err(|_| AdapterError::WrongElementType {
                id: id.to_string(),
                expected: "form control",
            })
    }

    fn value(&self) -> String {
        match self {
            FormControl::Input(input) => input.value(),
            FormControl::Select(select) => select.value(),
            FormControl::TextArea(area) => area.value(),
        }
    }
}

struct FormFields {
    name: FormControl,
    age: FormControl,
    gender: FormControl,
    weight: FormControl,
    height: FormControl,
    activity: FormControl,
    diet_pref: FormControl,
    goal: FormControl,
}

impl FormFields {
    fn lookup(document: &Document, ids: &FieldIds) -> Result<Self, AdapterError> {
        Ok(Self {
            name: FormControl::lookup(document, &ids.name)?,
            age: FormControl::lookup(document, &ids.age)?,
            gender: FormControl::lookup(document, &ids.gender)?,
            weight: FormControl::lookup(document, &ids.weight)?,
            height: FormControl::lookup(document, &ids.height)?,
            activity: FormControl::lookup(document, &ids.activity)?,
            diet_pref: FormControl::lookup(document, &ids.diet_pref)?,
            goal: FormControl::lookup(document, &ids.goal)?,
        })
    }
}

/// The health form and its results panel
pub struct FormAdapter {
    form: HtmlFormElement,
    result: Element,
    reset_button: Option<Element>,
    fields: FormFields,
    hidden_class: String,
    snack_seed: Option<u64>,
}

impl FormAdapter {
    /// Resolve every element named in `config`
    pub fn from_document(
        document: &Document,
        config: &AdapterConfig,
    ) -> Result<Self, AdapterError> {
        let form = element_by_id(document, &config.form_id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| AdapterError::WrongElementType {
                id: config.form_id.clone(),
                expected: "form",
            })?;
        let result = element_by_id(document, &config.result_id)?;
        let reset_button = if config.reset_id.is_empty() {
            None
        } else {
            document.get_element_by_id(&config.reset_id)
        };
        if reset_button.is_none() {
            debug!(reset_id = %config.reset_id, "No reset button, reset not wired");
        }

        Ok(Self {
            form,
            result,
            reset_button,
            fields: FormFields::lookup(document, &config.fields)?,
            hidden_class: config.hidden_class.clone(),
            snack_seed: config.snack_seed,
        })
    }

    /// Current field values
    pub fn read_input(&self) -> RawInput {
        let fields = &self.fields;
        RawInput {
            name: fields.name.value(),
            age: fields.age.value(),
            weight: fields.weight.value(),
            height: fields.height.value(),
            gender: fields.gender.value(),
            activity: fields.activity.value(),
            diet_pref: fields.diet_pref.value(),
            goal: fields.goal.value(),
        }
    }

    /// Run the engine on the current field values without touching the page
    pub fn evaluate(&self) -> Outcome {
        let raw = self.read_input();
        match self.snack_seed {
            Some(seed) => recommend(&raw, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => recommend(&raw, &mut rand::thread_rng()),
        }
    }

    /// Evaluate and show the outcome in the results panel
    pub fn submit(&self) -> Result<Outcome, AdapterError> {
        let outcome = self.evaluate();
        self.show(&render_outcome(&outcome))?;
        info!(valid = outcome.is_valid(), "Form submitted");
        Ok(outcome)
    }

    /// Clear the form and hide the results panel
    pub fn reset(&self) -> Result<(), AdapterError> {
        self.form.reset();
        self.result
            .class_list()
            .add_1(&self.hidden_class)
            .map_err(dom_error)?;
        self.result.set_inner_html("");
        debug!("Form reset");
        Ok(())
    }

    fn show(&self, html: &str) -> Result<(), AdapterError> {
        self.result.set_inner_html(html);
        self.result
            .class_list()
            .remove_1(&self.hidden_class)
            .map_err(dom_error)?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.result
            .scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

type Listener = Closure<dyn FnMut(Event)>;

/// A mounted form: the adapter plus its event listeners
///
/// Listeners stay registered for as long as the handle lives; dropping it
/// (or calling `free()` from JS) detaches them.
#[wasm_bindgen]
pub struct HealthFormApp {
    adapter: Rc<FormAdapter>,
    on_submit: Listener,
    on_reset: Option<Listener>,
}

impl HealthFormApp {
    /// Look up the page elements and wire submit and reset
    pub fn mount(config: &AdapterConfig) -> Result<Self, AdapterError> {
        let document = web_sys::window()
            .ok_or(AdapterError::NoWindow)?
            .document()
            .ok_or(AdapterError::NoDocument)?;
        let adapter = Rc::new(FormAdapter::from_document(&document, config)?);

        let submit_adapter = Rc::clone(&adapter);
        let on_submit: Listener = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            if let Err(e) = submit_adapter.submit() {
                error!(error = %e, "Failed to show recommendation");
            }
        }) as Box<dyn FnMut(Event)>);
        adapter
            .form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(dom_error)?;

        let on_reset = match &adapter.reset_button {
            Some(button) => {
                let reset_adapter = Rc::clone(&adapter);
                let listener: Listener = Closure::wrap(Box::new(move |_event: Event| {
                    if let Err(e) = reset_adapter.reset() {
                        error!(error = %e, "Failed to reset form");
                    }
                }) as Box<dyn FnMut(Event)>);
                button
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    .map_err(dom_error)?;
                Some(listener)
            }
            None => None,
        };

        info!(form_id = %config.form_id, "Health form mounted");

        Ok(Self {
            adapter,
            on_submit,
            on_reset,
        })
    }
}

#[wasm_bindgen]
impl HealthFormApp {
    /// Submit programmatically; returns whether the input was valid
    pub fn submit(&self) -> Result<bool, JsError> {
        Ok(self.adapter.submit()?.is_valid())
    }

    /// Reset programmatically
    pub fn reset(&self) -> Result<(), JsError> {
        Ok(self.adapter.reset()?)
    }

    /// Outcome for the current field values as JSON, without rendering
    #[wasm_bindgen(js_name = currentOutcome)]
    pub fn current_outcome(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.adapter.evaluate())?)
    }
}

impl Drop for HealthFormApp {
    fn drop(&mut self) {
        let removed = self.adapter.form.remove_event_listener_with_callback(
            "submit",
            self.on_submit.as_ref().unchecked_ref(),
        );
        if let Err(e) = removed {
            error!(error = %dom_error(e), "Failed to detach submit listener");
        }

        if let (Some(button), Some(listener)) = (&self.adapter.reset_button, &self.on_reset) {
            let removed = button
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
            if let Err(e) = removed {
                error!(error = %dom_error(e), "Failed to detach reset listener");
            }
        }
    }
}
