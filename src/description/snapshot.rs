//! Last-described balloon state and its per-field diff.

use crate::description::ranges::{charge_bucket, ChargeBucket};
use crate::simulation::model::BaseModel;
use crate::simulation::states::{BalloonId, Direction, NVec2};

/// Everything narration watches about one balloon, sampled once per step
#[derive(Debug, Clone, PartialEq)]
pub struct DescribedState {
    pub velocity: NVec2,
    pub drag_velocity: NVec2,
    pub center: NVec2,
    pub direction: Option<Direction>,
    pub visible: bool,
    pub touching_wall: bool,
    pub dragged: bool,
    pub wall_visible: bool,
    pub on_sweater: bool,
    pub inducing_charge: bool,
    pub charge: i32,
    pub charge_bucket: ChargeBucket,
}

/// Which fields differ between two snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChanges {
    pub velocity: bool,
    pub drag_velocity: bool,
    pub center: bool,
    pub direction: bool,
    pub visible: bool,
    pub touching_wall: bool,
    pub dragged: bool,
    pub wall_visible: bool,
    pub on_sweater: bool,
    pub inducing_charge: bool,
    pub charge: bool,
    pub charge_bucket: bool,
}

impl DescribedState {
    pub fn sample(model: &BaseModel, id: BalloonId) -> Self {
        let b = model.balloon(id);
        Self {
            velocity: b.velocity,
            drag_velocity: b.drag_velocity,
            center: b.center(),
            direction: b.direction,
            visible: b.visible,
            touching_wall: model.touching_wall(id),
            dragged: b.dragged,
            wall_visible: model.wall.visible,
            on_sweater: model.on_sweater(id),
            inducing_charge: model.inducing_charge(id),
            charge: b.charge,
            charge_bucket: charge_bucket(b.charge),
        }
    }

    pub fn diff(&self, next: &DescribedState) -> StateChanges {
        StateChanges {
            velocity: self.velocity != next.velocity,
            drag_velocity: self.drag_velocity != next.drag_velocity,
            center: self.center != next.center,
            direction: self.direction != next.direction,
            visible: self.visible != next.visible,
            touching_wall: self.touching_wall != next.touching_wall,
            dragged: self.dragged != next.dragged,
            wall_visible: self.wall_visible != next.wall_visible,
            on_sweater: self.on_sweater != next.on_sweater,
            inducing_charge: self.inducing_charge != next.inducing_charge,
            charge: self.charge != next.charge,
            charge_bucket: self.charge_bucket != next.charge_bucket,
        }
    }
}
