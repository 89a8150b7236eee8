//! Binding simulation cells to an external scene's transforms
//!
//! The scene loader owns every transform. The simulation only keeps opaque
//! handles (indices into the loader's drawable list), resolved by the
//! renderer at draw time.

use std::fmt;

/// Index into the externally owned transform table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformHandle(pub u32);

/// Why a scene could not be bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Wrong number of drawables named `Pillar*`
    PillarCount { expected: usize, found: usize },
    /// No drawable named `Cube`
    MissingCube,
    /// More than one drawable named `Cube`
    DuplicateCube,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::PillarCount { expected, found } => {
                write!(f, "expected {} pillars, but found {}", expected, found)
            }
            SceneError::MissingCube => write!(f, "scene has no drawable named \"Cube\""),
            SceneError::DuplicateCube => {
                write!(f, "scene has more than one drawable named \"Cube\"")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Handles for every pillar (in cell order) and for the cube
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBindings {
    pillars: Vec<TransformHandle>,
    cube: TransformHandle,
}

impl SceneBindings {
    /// Scan drawable names in scene order. Pillars take cell indices in the
    /// order they appear.
    pub fn from_names<'a>(
        names: impl IntoIterator<Item = &'a str>,
        cell_count: usize,
    ) -> Result<Self, SceneError> {
        let mut pillars = Vec::with_capacity(cell_count);
        let mut cube = None;

        for (i, name) in names.into_iter().enumerate() {
            let handle = TransformHandle(i as u32);
            if name.starts_with("Pillar") {
                pillars.push(handle);
            } else if name == "Cube" {
                if cube.replace(handle).is_some() {
                    return Err(SceneError::DuplicateCube);
                }
            }
        }

        if pillars.len() != cell_count {
            return Err(SceneError::PillarCount {
                expected: cell_count,
                found: pillars.len(),
            });
        }
        let cube = cube.ok_or(SceneError::MissingCube)?;

        log::debug!("bound {} pillars and cube {:?}", pillars.len(), cube);
        Ok(Self { pillars, cube })
    }

    pub fn pillar(&self, cell: usize) -> TransformHandle {
        self.pillars[cell]
    }

    pub fn pillars(&self) -> &[TransformHandle] {
        &self.pillars
    }

    pub fn cube(&self) -> TransformHandle {
        self.cube
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_pillars_in_scene_order() {
        let names = ["Light", "Pillar.001", "Cube", "Pillar.002", "Pillar.003", "Pillar.004"];
        let bindings = SceneBindings::from_names(names, 4).unwrap();
        assert_eq!(bindings.cube(), TransformHandle(2));
        assert_eq!(bindings.pillar(0), TransformHandle(1));
        assert_eq!(bindings.pillar(3), TransformHandle(5));
        assert_eq!(bindings.pillars().len(), 4);
    }

    #[test]
    fn test_reports_missing_pieces() {
        assert_eq!(
            SceneBindings::from_names(["Pillar", "Cube"], 4),
            Err(SceneError::PillarCount {
                expected: 4,
                found: 1
            })
        );
        assert_eq!(
            SceneBindings::from_names(["Pillar", "Pillar"], 2),
            Err(SceneError::MissingCube)
        );
        assert_eq!(
            SceneBindings::from_names(["Cube", "Pillar", "Cube"], 1),
            Err(SceneError::DuplicateCube)
        );
        assert_eq!(
            SceneError::PillarCount {
                expected: 81,
                found: 80
            }
            .to_string(),
            "expected 81 pillars, but found 80"
        );
    }
}
