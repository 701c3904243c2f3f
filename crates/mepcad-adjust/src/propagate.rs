//! Attachment propagation: keep fittings coincident with a moved end.

use mepcad_math::{Point3, Vec3};
use thiserror::Error;

use crate::connector::Connector;

/// Opaque host element identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// A failed host write, reported by the host surface.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("host write failed for element {element:?}: {reason}")]
pub struct HostWriteError {
    /// The element whose write failed.
    pub element: ElementId,
    /// Host-provided failure description.
    pub reason: String,
}

impl HostWriteError {
    /// Create a write error for `element`.
    pub fn new(element: ElementId, reason: impl Into<String>) -> Self {
        Self {
            element,
            reason: reason.into(),
        }
    }
}

/// The slice of the host document that propagation needs.
///
/// Implementations enumerate attachments excluding the run being
/// adjusted itself, and expose the two translation commands the host
/// supports.
pub trait AttachmentHost {
    /// Elements attached at `connector`, excluding the adjusted run.
    fn attached_elements(&self, connector: &Connector) -> Vec<ElementId>;

    /// The element's single representative location point, if it has
    /// one. `Ok(None)` means the element has no point-style location;
    /// `Err` means the location could not be resolved at all.
    fn representative_point(
        &self,
        element: ElementId,
    ) -> std::result::Result<Option<Point3>, HostWriteError>;

    /// Move the element's representative point to `to`.
    fn move_representative_point(
        &mut self,
        element: ElementId,
        to: Point3,
    ) -> std::result::Result<(), HostWriteError>;

    /// Rigidly translate the whole element by `offset`.
    fn translate_element(
        &mut self,
        element: ElementId,
        offset: Vec3,
    ) -> std::result::Result<(), HostWriteError>;
}

/// Translate everything attached to the moved connector by
/// `displacement`.
///
/// Elements with a point-style location get their point moved;
/// everything else gets a rigid translation. A failure on one element
/// is logged and skipped — the remaining attachments are still
/// processed, and the primary geometry change stands on its own.
pub fn propagate(moved: &Connector, displacement: Vec3, host: &mut dyn AttachmentHost) {
    for element in host.attached_elements(moved) {
        let outcome = match host.representative_point(element) {
            Ok(Some(point)) => host.move_representative_point(element, point + displacement),
            Ok(None) => host.translate_element(element, displacement),
            Err(e) => Err(e),
        };
        if let Err(e) = outcome {
            log::warn!("skipping attached element {:?}: {e}", element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ConnectorId;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    /// In-memory host: some elements have point locations, some only
    /// accept rigid translations, and some fail every operation.
    struct FakeHost {
        attachments: Vec<ElementId>,
        points: HashMap<ElementId, Point3>,
        translations: HashMap<ElementId, Vec3>,
        broken: Vec<ElementId>,
    }

    impl FakeHost {
        fn new(attachments: Vec<ElementId>) -> Self {
            Self {
                attachments,
                points: HashMap::new(),
                translations: HashMap::new(),
                broken: Vec::new(),
            }
        }
    }

    impl AttachmentHost for FakeHost {
        fn attached_elements(&self, _connector: &Connector) -> Vec<ElementId> {
            self.attachments.clone()
        }

        fn representative_point(
            &self,
            element: ElementId,
        ) -> std::result::Result<Option<Point3>, HostWriteError> {
            if self.broken.contains(&element) {
                return Err(HostWriteError::new(element, "location unreadable"));
            }
            Ok(self.points.get(&element).copied())
        }

        fn move_representative_point(
            &mut self,
            element: ElementId,
            to: Point3,
        ) -> std::result::Result<(), HostWriteError> {
            self.points.insert(element, to);
            Ok(())
        }

        fn translate_element(
            &mut self,
            element: ElementId,
            offset: Vec3,
        ) -> std::result::Result<(), HostWriteError> {
            *self.translations.entry(element).or_insert_with(Vec3::zeros) += offset;
            Ok(())
        }
    }

    fn moved_connector() -> Connector {
        Connector::new(ConnectorId::End, Point3::new(10.0, 0.0, 0.0), true)
    }

    #[test]
    fn test_point_elements_get_point_move() {
        let fitting = ElementId(1);
        let mut host = FakeHost::new(vec![fitting]);
        host.points.insert(fitting, Point3::new(10.0, 0.0, 0.0));

        propagate(&moved_connector(), Vec3::new(0.0, 0.0, 2.5), &mut host);

        let p = host.points[&fitting];
        assert_relative_eq!(p.z, 2.5, epsilon = 1e-12);
        assert!(host.translations.is_empty());
    }

    #[test]
    fn test_pointless_elements_get_rigid_translation() {
        let duct = ElementId(2);
        let mut host = FakeHost::new(vec![duct]);

        propagate(&moved_connector(), Vec3::new(1.0, 0.0, 0.0), &mut host);

        assert_relative_eq!(host.translations[&duct].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_failure_skips_but_continues() {
        let broken = ElementId(3);
        let fine = ElementId(4);
        let mut host = FakeHost::new(vec![broken, fine]);
        host.broken.push(broken);

        propagate(&moved_connector(), Vec3::new(0.0, 1.0, 0.0), &mut host);

        // The broken element was skipped; the other still moved.
        assert!(!host.translations.contains_key(&broken));
        assert_relative_eq!(host.translations[&fine].y, 1.0, epsilon = 1e-12);
    }
}
