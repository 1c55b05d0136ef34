//! Interactive view of a solved graph-coloring instance.
//!
//! The crate is mounted as a client-side Leptos app: one page draws the
//! first coloring of the bundled instance as a circular graph that can be
//! switched to a schedule grid.

use leptos::prelude::*;
use leptos_meta::{Html, Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

mod components;
mod pages;

use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

const LOG_LEVEL: Level = Level::Debug;

/// Route `log` output to the browser console and report panics there too.
pub fn init_logging() {
	if console_log::init_with_level(LOG_LEVEL).is_err() {
		return;
	}
	console_error_panic_hook::set_once();
	info!("Console logging at {}", LOG_LEVEL);
}

/// Root component: document metadata and the coloring page route.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Graph Coloring" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Graph coloring shown as a graph and as a timetable" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
