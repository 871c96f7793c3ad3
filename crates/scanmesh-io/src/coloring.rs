//! Classification coloring.

use crate::anchor::{MeshClassification, PlaneClassification};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SimpleColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl SimpleColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Maps surface classifications to display colors.
pub trait ClassificationColoring {
    fn color_for_mesh_classification(&self, classification: MeshClassification) -> SimpleColor;

    fn color_for_plane_classification(&self, classification: PlaneClassification) -> SimpleColor;
}

/// Fixed palette indexed by classification discriminant.
const PALETTE: [SimpleColor; 8] = [
    SimpleColor::new(128, 128, 128), // none
    SimpleColor::new(255, 170, 51),  // wall
    SimpleColor::new(51, 153, 255),  // floor
    SimpleColor::new(204, 102, 255), // ceiling
    SimpleColor::new(102, 204, 102), // table
    SimpleColor::new(255, 102, 153), // seat
    SimpleColor::new(102, 230, 230), // window
    SimpleColor::new(153, 102, 51),  // door
];

/// The built-in palette. Planes and meshes of the same category share a color.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassificationColoring;

impl ClassificationColoring for DefaultClassificationColoring {
    fn color_for_mesh_classification(&self, classification: MeshClassification) -> SimpleColor {
        PALETTE[classification as usize]
    }

    fn color_for_plane_classification(&self, classification: PlaneClassification) -> SimpleColor {
        PALETTE[classification as usize]
    }
}
