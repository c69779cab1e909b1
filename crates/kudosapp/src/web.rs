//! # Browser Binding
//!
//! Mounts the widget onto the page markup it was designed for. The page
//! provides the elements below (by id); this module attaches click handlers
//! to the six interactive ones and writes text, classes and attributes on
//! the rest.
//!
//! | id | role |
//! |----|------|
//! | `likeBtn`, `dislikeBtn` | vote buttons (`picked` class, `disabled` attribute) |
//! | `likeCount`, `dislikeCount` | count displays |
//! | `commentInput` | comment text input |
//! | `submitComment`, `clearInput`, `resetAll` | comment and reset buttons |
//! | `comments` | list container, rebuilt with `<li>` items on every render |
//! | `toast` | transient notice |
//!
//! The notice timer is a `setTimeout` handle owned by the widget. Showing a
//! notice clears the pending handle before arming a new one.

use crate::api::{ButtonView, KudosApi};
use crate::clock::SystemClock;
use crate::config::KudosConfig;
use crate::store::document::DocumentJar;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

type PageApi = KudosApi<DocumentJar, SystemClock>;

struct Elements {
    like_btn: Element,
    dislike_btn: Element,
    like_count: Element,
    dislike_count: Element,
    input: HtmlInputElement,
    submit: Element,
    clear: Element,
    reset: Element,
    comments: Element,
    toast: HtmlElement,
}

fn by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

impl Elements {
    fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            like_btn: by_id(document, "likeBtn")?,
            dislike_btn: by_id(document, "dislikeBtn")?,
            like_count: by_id(document, "likeCount")?,
            dislike_count: by_id(document, "dislikeCount")?,
            input: by_id(document, "commentInput")?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| JsValue::from_str("#commentInput is not an input"))?,
            submit: by_id(document, "submitComment")?,
            clear: by_id(document, "clearInput")?,
            reset: by_id(document, "resetAll")?,
            comments: by_id(document, "comments")?,
            toast: by_id(document, "toast")?
                .dyn_into::<HtmlElement>()
                .map_err(|_| JsValue::from_str("#toast is not an HTML element"))?,
        })
    }
}

/// Armed auto-clear for the visible notice. The callback must outlive the
/// timeout, so it is kept here until the next notice replaces it.
struct PendingClear {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

struct Widget {
    api: PageApi,
    els: Elements,
    window: Window,
    document: Document,
    pending: Option<PendingClear>,
    shown: Option<u64>,
}

fn set_button(el: &Element, state: ButtonView) -> Result<(), JsValue> {
    el.class_list().toggle_with_force("picked", state.picked)?;
    el.toggle_attribute_with_force("disabled", state.disabled)?;
    Ok(())
}

impl Widget {
    fn render(&self) -> Result<(), JsValue> {
        let view = self.api.render();
        self.els
            .like_count
            .set_text_content(Some(&view.likes.to_string()));
        self.els
            .dislike_count
            .set_text_content(Some(&view.dislikes.to_string()));
        set_button(&self.els.like_btn, view.like_button)?;
        set_button(&self.els.dislike_btn, view.dislike_button)?;

        self.els.comments.set_inner_html("");
        for text in &view.comments {
            let li = self.document.create_element("li")?;
            li.set_text_content(Some(text));
            self.els.comments.append_child(&li)?;
        }
        Ok(())
    }
}

fn show_notice(widget: &Rc<RefCell<Widget>>) -> Result<(), JsValue> {
    let mut w = widget.borrow_mut();
    let Some(notice) = w.api.notice().cloned() else {
        return Ok(());
    };
    // Clicks without a message (clearing the input) leave the toast alone.
    if w.shown == Some(notice.id) {
        return Ok(());
    }
    w.shown = Some(notice.id);

    w.els.toast.set_text_content(Some(&notice.message.content));
    w.els.toast.style().set_property("display", "block")?;

    if let Some(previous) = w.pending.take() {
        w.window.clear_timeout_with_handle(previous.handle);
    }

    let weak = Rc::downgrade(widget);
    let id = notice.id;
    let callback = Closure::<dyn FnMut()>::new(move || {
        let Some(widget) = weak.upgrade() else {
            return;
        };
        let mut w = widget.borrow_mut();
        if w.api.expire_notice(id) {
            if let Err(e) = w.els.toast.style().set_property("display", "none") {
                warn!(error = ?e, "could not hide notice");
            }
        }
    });

    let delay = i32::try_from(w.api.notice_duration().num_milliseconds()).unwrap_or(i32::MAX);
    let handle = w
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        )?;
    w.pending = Some(PendingClear {
        handle,
        _callback: callback,
    });
    Ok(())
}

fn on_click<F>(widget: &Rc<RefCell<Widget>>, target: &Element, action: F) -> Result<(), JsValue>
where
    F: Fn(&mut Widget) + 'static,
{
    let widget = Rc::clone(widget);
    let callback = Closure::<dyn FnMut()>::new(move || {
        action(&mut widget.borrow_mut());
        if let Err(e) = widget.borrow().render() {
            warn!(error = ?e, "render failed");
        }
        if let Err(e) = show_notice(&widget) {
            warn!(error = ?e, "notice failed");
        }
    });
    target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    // Handlers live as long as the page.
    callback.forget();
    Ok(())
}

/// Mounts the widget with the given configuration.
pub fn mount(config: KudosConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let jar = DocumentJar::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let els = Elements::find(&document)?;

    let mut api = KudosApi::new(jar, SystemClock, &config);
    api.init();

    let targets = [
        els.like_btn.clone(),
        els.dislike_btn.clone(),
        els.submit.clone(),
        els.clear.clone(),
        els.reset.clone(),
    ];
    let widget = Rc::new(RefCell::new(Widget {
        api,
        els,
        window,
        document,
        pending: None,
        shown: None,
    }));
    widget.borrow().render()?;

    let [like, dislike, submit, clear, reset] = targets;
    on_click(&widget, &like, |w| {
        w.api.like();
    })?;
    on_click(&widget, &dislike, |w| {
        w.api.dislike();
    })?;
    on_click(&widget, &submit, |w| {
        let text = w.els.input.value();
        w.api.set_input(text);
        w.api.submit_comment();
        w.els.input.set_value(w.api.input());
    })?;
    on_click(&widget, &clear, |w| {
        w.api.clear_input();
        w.els.input.set_value("");
        if let Err(e) = w.els.input.focus() {
            warn!(error = ?e, "could not focus input");
        }
    })?;
    on_click(&widget, &reset, |w| {
        w.api.reset();
        w.els.input.set_value("");
    })?;
    Ok(())
}

/// JavaScript entry point: `mount_widget()` after the markup is in the DOM.
#[wasm_bindgen]
pub fn mount_widget() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    mount(KudosConfig::default())
}
