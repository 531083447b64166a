use std::collections::HashSet;

use bevy::{ecs::component::Component, prelude::ReflectComponent, reflect::Reflect};

/// The set of clips that can actually be played for a character. Whatever owns
/// the loaded animation assets implements this.
pub trait ClipLibrary {
    fn contains_clip(&self, name: &str) -> bool;
}

impl ClipLibrary for HashSet<String> {
    fn contains_clip(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: AsRef<str>> ClipLibrary for [S] {
    fn contains_clip(&self, name: &str) -> bool {
        self.iter().any(|s| s.as_ref() == name)
    }
}

impl<S: AsRef<str>> ClipLibrary for Vec<S> {
    fn contains_clip(&self, name: &str) -> bool {
        self.as_slice().contains_clip(name)
    }
}

impl<T: ClipLibrary + ?Sized> ClipLibrary for &T {
    fn contains_clip(&self, name: &str) -> bool {
        (**self).contains_clip(name)
    }
}

/// Names of the clips loaded for a character entity. Kept sorted and
/// deduplicated.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
pub struct AvailableClips {
    names: Vec<String>,
}

impl AvailableClips {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if let Err(index) = self.names.binary_search(&name) {
            self.names.insert(index, name);
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.binary_search_by(|n| n.as_str().cmp(name)) {
            Ok(index) => {
                self.names.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl ClipLibrary for AvailableClips {
    fn contains_clip(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_and_set_libraries_agree() {
        let names = ["IDLE", "RUN"];
        let set: HashSet<String> = names.iter().map(|s| s.to_string()).collect();
        let clips = AvailableClips::new(names);

        for name in ["IDLE", "RUN", "FALL"] {
            assert_eq!(names[..].contains_clip(name), set.contains_clip(name));
            assert_eq!(clips.contains_clip(name), set.contains_clip(name));
        }
    }

    #[test]
    fn available_clips_stay_deduplicated() {
        let mut clips = AvailableClips::new(["RUN", "IDLE", "RUN"]);
        clips.insert("FALL");
        clips.insert("IDLE");
        assert_eq!(clips.iter().collect::<Vec<_>>(), vec!["FALL", "IDLE", "RUN"]);

        assert!(clips.remove("RUN"));
        assert!(!clips.remove("RUN"));
        assert!(!clips.contains_clip("RUN"));
    }
}
