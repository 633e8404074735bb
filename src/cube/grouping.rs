//! Face-slice membership.
//!
//! Groups are derived from positions each time a face is touched; groups of
//! faces nobody asked about may be stale.

use crate::cube::cubie::Cubie;
use crate::cube::lattice::Face;
use crate::cube::rig::{Frame, Rig};

#[derive(Clone, Debug, Default)]
pub struct FaceGroups {
    members: [Vec<usize>; 6],
}

impl FaceGroups {
    /// Cubie ids last recorded on `face`.
    pub fn members(&self, face: Face) -> &[usize] {
        &self.members[face.index()]
    }

    /// Recomputes the members of `face` and reparents every cubie: members
    /// under the face frame, everything else under the neutral frame.
    pub fn reconcile(
        &mut self,
        face: Face,
        cubies: &mut [Cubie],
        rig: &Rig,
        tolerance: f32,
    ) -> &[usize] {
        let group = &mut self.members[face.index()];
        for cubie in cubies.iter_mut() {
            let position = rig.relative_position(cubie);
            if face.contains(position, tolerance) {
                if !group.contains(&cubie.id) {
                    group.push(cubie.id);
                }
                rig.reparent(cubie, Frame::Face(face));
            } else {
                group.retain(|id| *id != cubie.id);
                rig.reparent(cubie, Frame::Neutral);
            }
        }
        log::debug!("{face:?} face holds {} cubies", group.len());
        &self.members[face.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::lattice::lattice_cells;
    use bevy::prelude::*;

    fn cubies() -> Vec<Cubie> {
        lattice_cells().enumerate().map(|(id, cell)| Cubie::new(id, cell)).collect()
    }

    #[test]
    fn every_face_holds_nine() {
        let mut rig = Rig::default();
        rig.set_root_angles(0.8, 2.1);
        let mut cubies = cubies();
        let mut groups = FaceGroups::default();

        for face in Face::ALL {
            let members = groups.reconcile(face, &mut cubies, &rig, 0.01).to_vec();
            assert_eq!(members.len(), 9, "{face:?}");
            for id in members {
                let cubie = &cubies[id];
                assert!(face.contains(rig.relative_position(cubie), 0.01));
                assert_eq!(cubie.frame, Frame::Face(face));
            }
        }
    }

    #[test]
    fn reconcile_is_idempotent() {
        let rig = Rig::default();
        let mut cubies = cubies();
        let mut groups = FaceGroups::default();

        groups.reconcile(Face::Front, &mut cubies, &rig, 0.01);
        groups.reconcile(Face::Front, &mut cubies, &rig, 0.01);
        assert_eq!(groups.members(Face::Front).len(), 9);
    }

    #[test]
    fn leaving_a_face_moves_cubie_to_neutral() {
        let rig = Rig::default();
        let mut cubies = cubies();
        let mut groups = FaceGroups::default();

        groups.reconcile(Face::Top, &mut cubies, &rig, 0.01);
        groups.reconcile(Face::Left, &mut cubies, &rig, 0.01);

        let top_only = cubies
            .iter()
            .find(|c| c.home == IVec3::new(1, 1, 0))
            .map(|c| c.frame);
        assert_eq!(top_only, Some(Frame::Neutral));
        // The top group is stale until the top face is queried again.
        assert_eq!(groups.members(Face::Top).len(), 9);
    }
}
