//! View-cube gizmo targets and the camera requests a click produces.
//!
//! The cube is split into 26 clickable elements: 6 faces, 12 edges and 8
//! corners. Each element names a direction from the orbit pivot; clicking
//! it frames the scene and orbits the camera to look from that direction.
//! Hit-testing the rendered cube is left to the host.

use glam::{IVec3, Vec3};

/// One face of the view cube, named by the side of the scene it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
}

impl CubeFace {
    /// All faces.
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::Left,
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Back,
    ];

    /// Outward face normal in integer cube coordinates.
    #[must_use]
    pub fn normal(self) -> IVec3 {
        match self {
            Self::Right => IVec3::X,
            Self::Left => IVec3::NEG_X,
            Self::Top => IVec3::Y,
            Self::Bottom => IVec3::NEG_Y,
            Self::Front => IVec3::Z,
            Self::Back => IVec3::NEG_Z,
        }
    }
}

/// What kind of cube element a target is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// One of the 6 faces.
    Face,
    /// One of the 12 edges.
    Edge,
    /// One of the 8 corners.
    Corner,
}

/// A clickable view-cube element.
///
/// Stored as the element's offset from the cube center with each component
/// in `-1..=1`: faces have one non-zero component, edges two, corners three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewCubeTarget {
    offset: IVec3,
}

impl ViewCubeTarget {
    /// The element at `offset`, or `None` if the offset is zero or has a
    /// component outside `-1..=1`.
    #[must_use]
    pub fn from_offset(offset: IVec3) -> Option<Self> {
        let in_range = offset.cmpge(IVec3::NEG_ONE).all()
            && offset.cmple(IVec3::ONE).all();
        (in_range && offset != IVec3::ZERO).then_some(Self { offset })
    }

    /// A face element.
    #[must_use]
    pub fn face(face: CubeFace) -> Self {
        Self {
            offset: face.normal(),
        }
    }

    /// The edge shared by two faces, or `None` if they are parallel.
    #[must_use]
    pub fn edge(a: CubeFace, b: CubeFace) -> Option<Self> {
        let (na, nb) = (a.normal(), b.normal());
        if na.dot(nb) != 0 {
            return None;
        }
        Self::from_offset(na + nb)
    }

    /// The corner shared by three faces, or `None` if any two are parallel.
    #[must_use]
    pub fn corner(a: CubeFace, b: CubeFace, c: CubeFace) -> Option<Self> {
        let (na, nb, nc) = (a.normal(), b.normal(), c.normal());
        if na.dot(nb) != 0 || na.dot(nc) != 0 || nb.dot(nc) != 0 {
            return None;
        }
        Self::from_offset(na + nb + nc)
    }

    /// All 26 elements: faces first, then edges, then corners.
    pub fn all() -> impl Iterator<Item = Self> {
        let mut targets: Vec<Self> = (-1..=1)
            .flat_map(|x| {
                (-1..=1).flat_map(move |y| {
                    (-1..=1).filter_map(move |z| {
                        Self::from_offset(IVec3::new(x, y, z))
                    })
                })
            })
            .collect();
        targets.sort_by_key(|t| t.nonzero_components());
        targets.into_iter()
    }

    /// Offset from the cube center in integer cube coordinates.
    #[must_use]
    pub fn offset(&self) -> IVec3 {
        self.offset
    }

    /// Face, edge or corner.
    #[must_use]
    pub fn kind(&self) -> TargetKind {
        match self.nonzero_components() {
            1 => TargetKind::Face,
            2 => TargetKind::Edge,
            _ => TargetKind::Corner,
        }
    }

    /// Unit direction from the pivot to where the camera should sit.
    ///
    /// The face normal for faces; the direction to the element's position on
    /// the cube for edges and corners.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.offset.as_vec3().normalize()
    }

    fn nonzero_components(&self) -> usize {
        self.offset.to_array().iter().filter(|c| **c != 0).count()
    }
}

/// A request from the gizmo into the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoRequest {
    /// Frame the whole scene.
    FrameScene {
        /// Ease instead of jumping.
        animate: bool,
    },
    /// Orbit so the camera looks from `direction`.
    RotateTo {
        /// Direction from the pivot to the camera.
        direction: Vec3,
        /// Ease instead of jumping.
        animate: bool,
    },
}

/// Requests for a click on `target`, in the order they are applied.
#[must_use]
pub fn click(target: ViewCubeTarget, animate: bool) -> [GizmoRequest; 2] {
    [
        GizmoRequest::FrameScene { animate },
        GizmoRequest::RotateTo {
            direction: target.direction(),
            animate,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_six_faces_twelve_edges_eight_corners() {
        let targets: Vec<ViewCubeTarget> = ViewCubeTarget::all().collect();
        assert_eq!(targets.len(), 26);
        let count = |kind| targets.iter().filter(|t| t.kind() == kind).count();
        assert_eq!(count(TargetKind::Face), 6);
        assert_eq!(count(TargetKind::Edge), 12);
        assert_eq!(count(TargetKind::Corner), 8);
        assert_eq!(targets[0].kind(), TargetKind::Face);
    }

    #[test]
    fn face_direction_is_normal() {
        for face in CubeFace::ALL {
            let target = ViewCubeTarget::face(face);
            assert_eq!(target.direction(), face.normal().as_vec3());
        }
    }

    #[test]
    fn edge_and_corner_point_at_their_position() {
        let edge = ViewCubeTarget::edge(CubeFace::Top, CubeFace::Front).unwrap();
        assert_eq!(edge.offset(), IVec3::new(0, 1, 1));
        let d = edge.direction();
        assert!((d.y - d.z).abs() < 1e-6 && d.x == 0.0);

        let corner =
            ViewCubeTarget::corner(CubeFace::Right, CubeFace::Top, CubeFace::Back)
                .unwrap();
        assert_eq!(corner.offset(), IVec3::new(1, 1, -1));
        assert!((corner.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn parallel_faces_make_no_edge() {
        assert!(ViewCubeTarget::edge(CubeFace::Top, CubeFace::Bottom).is_none());
        assert!(ViewCubeTarget::edge(CubeFace::Top, CubeFace::Top).is_none());
        assert!(ViewCubeTarget::corner(
            CubeFace::Top,
            CubeFace::Front,
            CubeFace::Back
        )
        .is_none());
        assert!(ViewCubeTarget::from_offset(IVec3::ZERO).is_none());
        assert!(ViewCubeTarget::from_offset(IVec3::new(2, 0, 0)).is_none());
    }

    #[test]
    fn click_frames_then_rotates() {
        let requests = click(ViewCubeTarget::face(CubeFace::Top), true);
        assert_eq!(requests[0], GizmoRequest::FrameScene { animate: true });
        assert_eq!(
            requests[1],
            GizmoRequest::RotateTo {
                direction: Vec3::Y,
                animate: true
            }
        );
    }
}
