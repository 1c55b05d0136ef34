use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::Visualization;
use super::types::Point;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Pins the element's CSS size to its pixel size.
fn resize(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{}px", width));
	let _ = style.set_property("height", &format!("{}px", height));
}

#[component]
pub fn ColoringCanvas(visualization: Visualization) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (width, height) = visualization.size();
	let state = Rc::new(RefCell::new(visualization));
	let ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let (state_init, ctx_init) = (state.clone(), ctx.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(context) = context_2d(&canvas) else {
			error!("Canvas has no 2d context");
			return;
		};
		render::render(&state_init.borrow(), &context);
		resize(&canvas, width, height);
		info!("Initial render done ({}x{})", width, height);
		*ctx_init.borrow_mut() = Some(context);
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let point = Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let mut vis = state.borrow_mut();
		if vis.click_at(point).is_some() {
			debug!(
				"Colored: {}, view: {:?}",
				vis.coloring.is_colored(),
				vis.view.view()
			);
			if let Some(ref context) = *ctx.borrow() {
				render::render(&vis, context);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="coloring-canvas"
			on:click=on_click
			style="display: block; cursor: pointer;"
		/>
	}
}
