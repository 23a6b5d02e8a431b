// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::render::ElementTransform;

/// A callback sink notified after every committed transform.
///
/// The observer only sees the committed description, never the state, so it
/// cannot re-enter a mutator while a commit is in progress.
///
/// Implemented for `()` (ignore everything) and for any
/// `FnMut(&ElementTransform)` closure.
pub trait TransformObserver {
    /// Called once per commit, after the renderer received `transform`.
    fn on_transform(&mut self, transform: &ElementTransform);
}

impl TransformObserver for () {
    fn on_transform(&mut self, _transform: &ElementTransform) {}
}

impl<F> TransformObserver for F
where
    F: FnMut(&ElementTransform),
{
    fn on_transform(&mut self, transform: &ElementTransform) {
        self(transform);
    }
}
