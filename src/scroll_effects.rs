use std::cell::RefCell;
use std::rc::Rc;

use folio_core::contrast::ContrastPreset;
use folio_core::host::{HostError, CURSOR_GLOW_ID, SCROLL_INDICATOR_ID};
use folio_core::motion::{
    anchor_target, parallax_transform, percent, px, ANCHOR_SELECTOR, DYNAMIC_TEXT_SELECTOR,
    PARALLAX_SELECTOR, SKILL_TAG_HOVER_TRANSFORM, SKILL_TAG_REST_TRANSFORM, SKILL_TAG_SELECTOR,
};
use folio_core::reveal::{
    RevealState, RevealTracker, REVEAL_ID_ATTR, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, REVEAL_TRANSITION,
};
use folio_core::{scroll_percentage, text_color_for_scroll};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Element handles shared by the event listeners.
struct PageHandles {
    window: Window,
    document: Document,
    glow: HtmlElement,
    indicator: HtmlElement,
}

/// Cursor glow, scroll progress, colour ramp, contrast groups, reveal on
/// scroll, smooth anchors and parallax for the host page. Dropping it removes
/// every listener and disconnects the observer.
pub(crate) struct ScrollEffects {
    page: Rc<PageHandles>,
    reveal: Rc<RefCell<RevealTracker>>,
    observer: RefCell<Option<IntersectionObserver>>,
    observer_callback: RefCell<Option<ObserverCallback>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl ScrollEffects {
    /// Checks the host page up front and wires every effect. A missing
    /// element is reported here rather than on the first event.
    pub(crate) fn install() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        let glow = html_element_by_id(&document, CURSOR_GLOW_ID)?;
        let indicator = html_element_by_id(&document, SCROLL_INDICATOR_ID)?;

        let effects = Self {
            page: Rc::new(PageHandles {
                window,
                document,
                glow,
                indicator,
            }),
            reveal: Rc::new(RefCell::new(RevealTracker::new())),
            observer: RefCell::new(None),
            observer_callback: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        };
        effects.install_reveal()?;
        effects.install_listeners();
        effects.apply_scroll_styles(0.0);
        console::log!(
            "%c👋 Hello! Thanks for checking out my portfolio!",
            "color: #B4643C; font-size: 16px; font-weight: bold;"
        );
        console::log!(
            "effects: installed",
            effects.reveal.borrow().len() as u32,
            "reveal targets"
        );
        Ok(effects)
    }

    pub(crate) fn apply_scroll_styles(&self, percent: f64) {
        self.page.apply_scroll_styles(percent);
    }

    #[cfg(test)]
    pub(crate) fn revealed_count(&self) -> usize {
        self.reveal.borrow().visible_count()
    }

    fn install_reveal(&self) -> Result<(), HostError> {
        let reveal = self.reveal.clone();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if reveal_target(
                        &reveal,
                        &target,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ) {
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|_| HostError::ObserverUnavailable)?;

        let document = &self.page.document;
        for_each_html_element(document, REVEAL_SELECTOR, |element| {
            let id = self.reveal.borrow_mut().register();
            let _ = element.set_attribute(REVEAL_ID_ATTR, &id.to_string());
            set_style(element, "transition", REVEAL_TRANSITION);
            apply_reveal_state(element, RevealState::Hidden);
            observer.observe(element);
        });

        *self.observer.borrow_mut() = Some(observer);
        *self.observer_callback.borrow_mut() = Some(callback);
        Ok(())
    }

    fn install_listeners(&self) {
        let mut listeners = Vec::new();
        let page = self.page.clone();

        let glow = page.glow.clone();
        listeners.push(EventListener::new(
            &page.document,
            "mousemove",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                set_style(&glow, "left", &px(f64::from(event.client_x())));
                set_style(&glow, "top", &px(f64::from(event.client_y())));
            },
        ));

        let progress_page = page.clone();
        listeners.push(EventListener::new(&page.window, "scroll", move |_event| {
            let percent_scrolled = progress_page.scroll_percent();
            set_style(&progress_page.indicator, "width", &percent(percent_scrolled));
            progress_page.apply_scroll_styles(percent_scrolled);
        }));

        let parallax_page = page.clone();
        listeners.push(EventListener::new(&page.window, "scroll", move |_event| {
            let scroll_y = parallax_page.window.scroll_y().unwrap_or(0.0);
            let transform = parallax_transform(scroll_y);
            for_each_html_element(&parallax_page.document, PARALLAX_SELECTOR, |element| {
                set_style(element, "transform", &transform);
            });
        }));

        let anchor_options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        for_each_element(&page.document, ANCHOR_SELECTOR, |anchor| {
            let document = page.document.clone();
            let anchor_for_click = anchor.clone();
            listeners.push(EventListener::new_with_options(
                anchor,
                "click",
                anchor_options,
                move |event: &Event| {
                    event.prevent_default();
                    let href = anchor_for_click.get_attribute("href").unwrap_or_default();
                    let Some(selector) = anchor_target(&href) else {
                        return;
                    };
                    let Ok(Some(target)) = document.query_selector(selector) else {
                        return;
                    };
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                },
            ));
        });

        for_each_html_element(&page.document, SKILL_TAG_SELECTOR, |tag| {
            let hovered = tag.clone();
            listeners.push(EventListener::new(tag, "mouseenter", move |_event| {
                set_style(&hovered, "transform", SKILL_TAG_HOVER_TRANSFORM);
            }));
            let rested = tag.clone();
            listeners.push(EventListener::new(tag, "mouseleave", move |_event| {
                set_style(&rested, "transform", SKILL_TAG_REST_TRANSFORM);
            }));
        });

        *self.listeners.borrow_mut() = listeners;
    }
}

impl Drop for ScrollEffects {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.listeners.borrow_mut().clear();
    }
}

impl PageHandles {
    fn scroll_percent(&self) -> f64 {
        let Some(root) = self.document.document_element() else {
            return 0.0;
        };
        let body_top = self
            .document
            .body()
            .map(|body| body.scroll_top())
            .unwrap_or(0);
        let scroll_top = if body_top != 0 {
            body_top
        } else {
            root.scroll_top()
        };
        scroll_percentage(
            f64::from(scroll_top),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        )
    }

    fn apply_scroll_styles(&self, percent_scrolled: f64) {
        let color = text_color_for_scroll(percent_scrolled).to_css();
        for_each_html_element(&self.document, DYNAMIC_TEXT_SELECTOR, |element| {
            set_style(element, "color", &color);
        });
        let preset = ContrastPreset::for_scroll(percent_scrolled);
        for (selector, style) in preset.groups() {
            let declarations = style.declarations();
            for_each_html_element(&self.document, selector, |element| {
                for (property, value) in &declarations {
                    set_style(element, property, value);
                }
            });
        }
    }
}

fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, HostError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::missing_id(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HostError::WrongElementType {
            selector: format!("#{id}"),
        })
}

fn reveal_id(element: &Element) -> Option<usize> {
    element.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

/// Applies one intersection report to `target`. Returns `true` when the
/// element was just revealed and no longer needs observing.
fn reveal_target(
    reveal: &RefCell<RevealTracker>,
    target: &Element,
    is_intersecting: bool,
    ratio: f64,
) -> bool {
    let Some(id) = reveal_id(target) else {
        return false;
    };
    if !reveal.borrow_mut().observe(id, is_intersecting, ratio) {
        return false;
    }
    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        apply_reveal_state(element, RevealState::Visible);
    }
    true
}

fn apply_reveal_state(element: &HtmlElement, state: RevealState) {
    set_style(element, "opacity", state.opacity());
    set_style(element, "transform", state.transform());
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn for_each_element<F>(document: &Document, selector: &str, mut action: F)
where
    F: FnMut(&Element),
{
    let Ok(nodes) = document.query_selector_all(selector) else {
        console::warn!("effects: bad selector", selector.to_string());
        return;
    };
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Some(element) = node.dyn_ref::<Element>() {
            action(element);
        }
    }
}

fn for_each_html_element<F>(document: &Document, selector: &str, mut action: F)
where
    F: FnMut(&HtmlElement),
{
    for_each_element(document, selector, |element| {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            action(element);
        }
    });
}
