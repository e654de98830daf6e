//! Road-building colors and the mapping from simulation state to them.

use bevy::prelude::*;

use simulation::candidates::CandidateVisual;
use simulation::road_building::HintTint;

pub const CITY_DEFAULT_COLOR: Color = Color::BLACK;
pub const CITY_HOVER_COLOR: Color = Color::srgb(100.0 / 255.0, 100.0 / 255.0, 1.0);
pub const SELECTED_BORDER_COLOR: Color = CITY_HOVER_COLOR;
pub const SELECTED_BORDER_WIDTH: f32 = 5.0;

pub const HINT_AVAILABLE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const HINT_UNAVAILABLE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const ROAD_COLOR: Color = Color::srgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);

/// How a city should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityStyle {
    pub fill: Color,
    /// Border width around the footprint; `None` draws no border.
    pub border: Option<f32>,
}

pub fn candidate_style(visual: CandidateVisual) -> CityStyle {
    match visual {
        CandidateVisual::Idle => CityStyle {
            fill: CITY_DEFAULT_COLOR,
            border: None,
        },
        CandidateVisual::Hovered => CityStyle {
            fill: CITY_HOVER_COLOR,
            border: None,
        },
        CandidateVisual::Selected => CityStyle {
            fill: CITY_DEFAULT_COLOR,
            border: Some(SELECTED_BORDER_WIDTH),
        },
    }
}

pub fn hint_color(tint: HintTint) -> Color {
    match tint {
        HintTint::Available => HINT_AVAILABLE_COLOR,
        HintTint::Unavailable => HINT_UNAVAILABLE_COLOR,
    }
}
