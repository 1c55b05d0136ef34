use leptos::prelude::*;
use log::error;

use crate::components::coloring::{ColoringCanvas, Instance, VisConfig, Visualization};

/// Solved instance shown on the home page.
const SAMPLE_INSTANCE: &str = include_str!("../../data/sample_instance.json");

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Forge exports `adjacent` in both directions
	let config = VisConfig {
		dedup_edges: true,
		..VisConfig::default()
	};
	let visualization = Instance::from_json(SAMPLE_INSTANCE)
		.and_then(|instance| Visualization::new(&instance, &config))
		.inspect_err(|e| error!("Failed to build visualization: {}", e));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="coloring-view">
				<h1>"Graph Coloring"</h1>
				<p class="subtitle">"COLOR shows the coloring. CONVERT switches to the schedule grid."</p>
				{visualization.map(|vis| view! { <ColoringCanvas visualization=vis /> })}
			</div>
		</ErrorBoundary>
	}
}
