// Copyright 2025 the SuperZoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::input::InputKind;

/// Opaque handle for one host subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// The event source a widget attaches to.
///
/// A host delivers subscribed events to the widget's `handle` method and
/// honors the returned [`EventOutcome`](crate::EventOutcome). Unsubscribing an
/// id that is no longer registered must be harmless.
pub trait InputHost {
    /// Starts delivering events of `kind`.
    fn subscribe(&mut self, kind: InputKind) -> SubscriptionId;

    /// Stops delivering events for `id`.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

impl<H: InputHost + ?Sized> InputHost for &mut H {
    fn subscribe(&mut self, kind: InputKind) -> SubscriptionId {
        (**self).subscribe(kind)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id);
    }
}
