use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;

use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn with_classes<'a>(self, classes: impl IntoIterator<Item = &'a str>) -> JsResult<web_sys::Element>;
    fn set_class_present(&self, class: &str, present: bool) -> JsResult<()>;

    // Workaround for not being able to call `append_child(func_returning_element()?)` without an
    // intermediate variable.
    fn append_element(&self, child: web_sys::Element) -> JsResult<()>;
}

impl WebElementExt for web_sys::Element {
    fn with_classes<'a>(self, classes: impl IntoIterator<Item = &'a str>) -> JsResult<web_sys::Element> {
        for class in classes {
            self.class_list().add_1(class)?;
        }
        Ok(self)
    }

    fn set_class_present(&self, class: &str, present: bool) -> JsResult<()> {
        self.class_list().toggle_with_force(class, present)?;
        Ok(())
    }

    fn append_element(&self, child: web_sys::Element) -> JsResult<()> {
        self.append_child(&child)?;
        Ok(())
    }
}

pub trait WebEventTargetExt {
    // Passive listeners promise not to call `preventDefault`, which lets the browser keep
    // scrolling smooth while the listener runs.
    fn add_passive_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()>;
}

impl WebEventTargetExt for web_sys::EventTarget {
    // The listener lives as long as the page, so leaking the closure is fine.
    fn add_passive_event_listener_and_forget<E: FromWasmAbi + 'static>(
        &self, event_type: &str, listener: impl FnMut(E) -> JsResult<()> + 'static,
    ) -> JsResult<()> {
        let closure = Closure::new(listener);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        self.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
        Ok(())
    }
}
