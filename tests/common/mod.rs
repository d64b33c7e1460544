#![allow(dead_code)]

mod fixtures;

pub use assertions::{
    assert_attitude_eq, assert_physics_valid, assert_position_eq, assert_spatial_valid,
    assert_unit_attitude,
};
pub use fixtures::*;
