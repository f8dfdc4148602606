use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::Scalar;

/// Legacy flat sphere shape: coordinates and radius as top-level fields.
///
/// `Display` renders the object literal the way it appears in a scene file,
/// every float with exactly one decimal digit. The trailing comma separating
/// records is appended by the emit loops, not here.
#[derive(Deserialize, Serialize)]
pub struct FlatSphere {
    #[serde(rename = "type")]
    pub shape: String,
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub radius: Scalar,
    pub material: String,
}

impl FlatSphere {
    pub fn new(x: Scalar, y: Scalar, z: Scalar, radius: Scalar, material: &str) -> Self {
        FlatSphere {
            shape: "sphere".to_string(),
            x,
            y,
            z,
            radius,
            material: material.to_string(),
        }
    }
}

impl fmt::Display for FlatSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{ "type": "{}", "x": {:.1}, "y": {:.1}, "z": {:.1}, "radius": {:.1}, "material": "{}" }}"#,
            self.shape, self.x, self.y, self.z, self.radius, self.material
        )
    }
}

#[derive(Deserialize, Serialize)]
pub struct Position {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

#[derive(Deserialize, Serialize)]
pub struct Radius {
    pub value: Scalar,
}

/// Nested sphere shape: position grouped into an object, radius wrapped
/// in a `{ "value": .. }` object.
#[derive(Deserialize, Serialize)]
pub struct NestedSphere {
    #[serde(rename = "type")]
    pub shape: String,
    pub position: Position,
    pub radius: Radius,
    pub material: String,
}

impl NestedSphere {
    pub fn new(x: Scalar, y: Scalar, z: Scalar, radius: Scalar, material: &str) -> Self {
        NestedSphere {
            shape: "sphere".to_string(),
            position: Position { x, y, z },
            radius: Radius { value: radius },
            material: material.to_string(),
        }
    }
}

impl fmt::Display for NestedSphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{ "type": "{}", "position": {{ "x": {:.1}, "y": {:.1}, "z": {:.1} }}, "radius": {{ "value": {:.1} }}, "material": "{}" }}"#,
            self.shape,
            self.position.x,
            self.position.y,
            self.position.z,
            self.radius.value,
            self.material
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_sphere_renders_one_decimal_everywhere() {
        let ball = FlatSphere::new(3.2, 0.5, -7.8, 0.5, "metal2");
        assert_eq!(
            ball.to_string(),
            r#"{ "type": "sphere", "x": 3.2, "y": 0.5, "z": -7.8, "radius": 0.5, "material": "metal2" }"#
        );
    }

    #[test]
    fn flat_sphere_keeps_the_decimal_on_whole_numbers() {
        let ball = FlatSphere::new(10.0, 0.5, -10.0, 0.5, "glass");
        assert_eq!(
            ball.to_string(),
            r#"{ "type": "sphere", "x": 10.0, "y": 0.5, "z": -10.0, "radius": 0.5, "material": "glass" }"#
        );
    }

    #[test]
    fn flat_sphere_line_parses_back() {
        let ball = FlatSphere::new(1.5, 0.5, -0.5, 0.5, "mat4");
        let parsed: FlatSphere = serde_json::from_str(&ball.to_string()).unwrap();
        assert_eq!(parsed.shape, "sphere");
        assert_eq!(parsed.x, 1.5);
        assert_eq!(parsed.y, 0.5);
        assert_eq!(parsed.z, -0.5);
        assert_eq!(parsed.radius, 0.5);
        assert_eq!(parsed.material, "mat4");
    }

    #[test]
    fn nested_sphere_renders_grouped_position_and_radius() {
        let ball = NestedSphere::new(-20.5, 0.5, 12.3, 0.5, "diamond");
        assert_eq!(
            ball.to_string(),
            r#"{ "type": "sphere", "position": { "x": -20.5, "y": 0.5, "z": 12.3 }, "radius": { "value": 0.5 }, "material": "diamond" }"#
        );
    }

    #[test]
    fn nested_sphere_line_parses_back() {
        let ball = NestedSphere::new(5.5, 0.5, 0.5, 0.5, "metal6");
        let parsed: NestedSphere = serde_json::from_str(&ball.to_string()).unwrap();
        assert_eq!(parsed.shape, "sphere");
        assert_eq!(parsed.position.x, 5.5);
        assert_eq!(parsed.position.y, 0.5);
        assert_eq!(parsed.position.z, 0.5);
        assert_eq!(parsed.radius.value, 0.5);
        assert_eq!(parsed.material, "metal6");
    }

    #[test]
    fn serialization_carries_the_type_tag() {
        let ball = FlatSphere::new(0.0, 0.5, 0.0, 0.5, "ground");
        let value = serde_json::to_value(&ball).unwrap();
        assert_eq!(value["type"], "sphere");
    }
}
