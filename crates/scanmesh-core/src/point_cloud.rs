use crate::geometry_attribute::{GeometryAttributeType, PointAttribute};

/// A set of points described by typed attributes.
#[derive(Debug, Default, Clone)]
pub struct PointCloud {
    attributes: Vec<PointAttribute>,
    num_points: usize,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_num_points(&mut self, num_points: usize) {
        self.num_points = num_points;
    }

    /// Adds an attribute and returns its id. The id doubles as the
    /// attribute's unique id in the bitstream.
    pub fn add_attribute(&mut self, mut attribute: PointAttribute) -> usize {
        if self.num_points == 0 && attribute.size() > 0 {
            self.num_points = attribute.size();
        }
        let id = self.attributes.len();
        attribute.set_unique_id(id as u32);
        self.attributes.push(attribute);
        id
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute(&self, att_id: usize) -> &PointAttribute {
        &self.attributes[att_id]
    }

    pub fn attributes(&self) -> &[PointAttribute] {
        &self.attributes
    }

    pub fn named_attribute_id(&self, att_type: GeometryAttributeType) -> Option<usize> {
        self.attributes
            .iter()
            .position(|att| att.attribute_type() == att_type)
    }

    pub fn named_attribute(&self, att_type: GeometryAttributeType) -> Option<&PointAttribute> {
        self.named_attribute_id(att_type).map(|id| &self.attributes[id])
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }
}
