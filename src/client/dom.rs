//! Browser bindings for the client controllers.
//!
//! Runs once per page load against the document the generator produced.
//! Every controller is a no-op when its expected elements are absent.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use super::pagination::{DEFAULT_PAGE_SIZE, PagerControl, Paginator};
use super::scroll::{self, ScrollMetrics};
use super::theme::{PreferenceStore, StoreError, Theme, ThemeController, ThemeView};
use super::{
    ACTIVE_CLASS, CAN_SCROLL_DOWN_CLASS, CAN_SCROLL_UP_CLASS, DARK_BODY_CLASS, DARK_TOGGLE_ID,
    GROUP_ATTR, HIDDEN_CLASS, IS_SCROLLABLE_CLASS, LIGHT_TOGGLE_ID, PAGE_SIZE_ATTR,
    PAGINATED_CLASS, PAGER_CLASS, SCROLLABLE_CLASS, THEME_STORAGE_KEY,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    init_theme(&window, &document);
    init_pagination(&document);
    init_scroll_hints(&window, &document);
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    if on {
        let _ = list.add_1(class);
    } else {
        let _ = list.remove_1(class);
    }
}

fn on_click(target: &Element, handler: Box<dyn FnMut(web_sys::Event)>) {
    let closure = Closure::wrap(handler);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

// --- theme -----------------------------------------------------------------

/// `PreferenceStore` over `window.localStorage`. Storage may be missing
/// entirely (disabled by policy); reads then yield nothing and writes fail.
struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self) -> Option<Theme> {
        let storage = self.storage.as_ref()?;
        storage
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|value| Theme::parse(&value))
    }

    fn set(&mut self, theme: Theme) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError)?;
        storage
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(|_| StoreError)
    }
}

fn init_theme(window: &Window, document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    // The inline initializer in <head> may already have set the body class;
    // use it as the fallback when no preference is stored.
    let fallback = body
        .class_list()
        .contains(DARK_BODY_CLASS)
        .then_some(Theme::Dark);
    let controller = Rc::new(RefCell::new(ThemeController::load(
        LocalStore::new(window),
        fallback,
    )));
    apply_theme_view(document, &controller.borrow().view());

    for (id, theme) in [(LIGHT_TOGGLE_ID, Theme::Light), (DARK_TOGGLE_ID, Theme::Dark)] {
        let Some(toggle) = document.get_element_by_id(id) else {
            continue;
        };
        let controller = Rc::clone(&controller);
        let document = document.clone();
        on_click(
            &toggle,
            Box::new(move |_event| {
                let view = controller.borrow_mut().set(theme);
                apply_theme_view(&document, &view);
            }),
        );
    }
}

fn apply_theme_view(document: &Document, view: &ThemeView) {
    if let Some(body) = document.body() {
        toggle_class(&body, DARK_BODY_CLASS, view.dark_body_class);
    }
    if let Some(light) = document.get_element_by_id(LIGHT_TOGGLE_ID) {
        toggle_class(&light, ACTIVE_CLASS, view.light_active);
    }
    if let Some(dark) = document.get_element_by_id(DARK_TOGGLE_ID) {
        toggle_class(&dark, ACTIVE_CLASS, view.dark_active);
    }
}

// --- pagination ------------------------------------------------------------

struct ListContext {
    document: Document,
    list: Element,
    pager: Option<Element>,
    paginator: RefCell<Paginator>,
}

#[derive(Clone, Copy)]
enum PagerAction {
    Prev,
    Jump(usize),
    Next,
}

fn init_pagination(document: &Document) {
    let Ok(lists) = document.query_selector_all(&format!(".{PAGINATED_CLASS}")) else {
        return;
    };
    for index in 0..lists.length() {
        let Some(list) = lists
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let page_size = list
            .get_attribute(PAGE_SIZE_ATTR)
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let item_count = list.children().length() as usize;
        // The pager placeholder is keyed to the list by the shared group id.
        let pager = list.get_attribute(GROUP_ATTR).and_then(|group| {
            document
                .query_selector(&format!(".{PAGER_CLASS}[{GROUP_ATTR}=\"{group}\"]"))
                .ok()
                .flatten()
        });
        let context = Rc::new(ListContext {
            document: document.clone(),
            list,
            pager,
            paginator: RefCell::new(Paginator::new(item_count, page_size)),
        });
        apply_page(&context);
    }
}

/// Apply the current page's visibility window, then rebuild the pager.
fn apply_page(context: &Rc<ListContext>) {
    {
        let paginator = context.paginator.borrow();
        let items = context.list.children();
        for index in 0..items.length() {
            if let Some(item) = items.item(index) {
                toggle_class(&item, HIDDEN_CLASS, !paginator.is_visible(index as usize));
            }
        }
    }
    render_pager(context);
}

fn render_pager(context: &Rc<ListContext>) {
    let Some(pager) = &context.pager else {
        return;
    };
    pager.set_inner_html("");
    for control in context.paginator.borrow().controls() {
        let (label, disabled, active, action) = match control {
            PagerControl::Prev { enabled } => {
                ("\u{2039}".to_string(), !enabled, false, PagerAction::Prev)
            }
            PagerControl::Page { number, active } => {
                (number.to_string(), false, active, PagerAction::Jump(number))
            }
            PagerControl::Next { enabled } => {
                ("\u{203a}".to_string(), !enabled, false, PagerAction::Next)
            }
        };
        let Ok(button) = context.document.create_element("button") else {
            continue;
        };
        let _ = button.set_attribute("type", "button");
        button.set_text_content(Some(&label));
        if active {
            toggle_class(&button, ACTIVE_CLASS, true);
        }
        if disabled {
            let _ = button.set_attribute("disabled", "disabled");
        } else {
            let context = Rc::clone(context);
            on_click(
                &button,
                Box::new(move |_event| {
                    {
                        let mut paginator = context.paginator.borrow_mut();
                        match action {
                            PagerAction::Prev => paginator.prev(),
                            PagerAction::Jump(page) => paginator.goto(page),
                            PagerAction::Next => paginator.next(),
                        };
                    }
                    apply_page(&context);
                }),
            );
        }
        let _ = pager.append_child(&button);
    }
}

// --- scroll hints ----------------------------------------------------------

fn init_scroll_hints(window: &Window, document: &Document) {
    let Ok(nodes) = document.query_selector_all(&format!(".{SCROLLABLE_CLASS}")) else {
        return;
    };
    let mut regions = Vec::new();
    for index in 0..nodes.length() {
        if let Some(region) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            regions.push(region);
        }
    }
    if regions.is_empty() {
        return;
    }

    for region in &regions {
        update_scroll_hints(region);
        let target = region.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            update_scroll_hints(&target);
        }) as Box<dyn FnMut(_)>);
        let _ = region.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Geometry of every region can change on resize, so recompute them all.
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        for region in &regions {
            update_scroll_hints(region);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn update_scroll_hints(region: &Element) {
    let hints = scroll::hints(&ScrollMetrics {
        scroll_top: f64::from(region.scroll_top()),
        scroll_height: f64::from(region.scroll_height()),
        client_height: f64::from(region.client_height()),
    });
    toggle_class(region, IS_SCROLLABLE_CLASS, hints.is_scrollable);
    toggle_class(region, CAN_SCROLL_UP_CLASS, hints.can_scroll_up);
    toggle_class(region, CAN_SCROLL_DOWN_CLASS, hints.can_scroll_down);
}
