//! Tie a scrollbar to a host event source for the duration of a mount.
//!
//! Pointer moves and releases have to be observed on a process-wide event
//! source (the hosting document or window) while a gesture is live, and the
//! registration must be undone when the widget is torn down. [`Binding`] makes
//! the cleanup a scoped obligation: attaching returns a guard, and dropping
//! the guard detaches, so listeners cannot leak across repeated mount/unmount
//! cycles.

/// A host-side pointer event source a scrollbar can be attached to.
///
/// Implementations start delivering pointer events to the scrollbar on
/// [`attach`](Self::attach) and stop on [`detach`](Self::detach). The calls
/// are always balanced when going through a [`Binding`].
pub trait EventSource {
    /// Begins delivering pointer events.
    fn attach(&mut self);

    /// Stops delivering pointer events.
    fn detach(&mut self);
}

/// A scoped attachment to an [`EventSource`].
///
/// Created with [`Binding::new`], which attaches immediately; dropping the
/// [`Binding`] detaches. Any drag that was live at teardown is simply never
/// completed, which matches discarding the pending state.
#[derive(Debug)]
pub struct Binding<S>
where
    S: EventSource,
{
    source: S,
}

impl<S> Binding<S>
where
    S: EventSource,
{
    /// Attaches to the given [`EventSource`], returning the guard that owns
    /// the registration.
    pub fn new(mut source: S) -> Self {
        log::trace!("attaching scrollbar to event source");
        source.attach();

        Self { source }
    }

    /// Returns a reference to the bound [`EventSource`].
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the bound [`EventSource`].
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S> Drop for Binding<S>
where
    S: EventSource,
{
    fn drop(&mut self) {
        log::trace!("detaching scrollbar from event source");
        self.source.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting {
        attached: Rc<Cell<i32>>,
    }

    impl EventSource for Counting {
        fn attach(&mut self) {
            self.attached.set(self.attached.get() + 1);
        }

        fn detach(&mut self) {
            self.attached.set(self.attached.get() - 1);
        }
    }

    #[test]
    fn test_attach_detach_is_symmetric() {
        let attached = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let binding = Binding::new(Counting {
                attached: Rc::clone(&attached),
            });

            assert_eq!(attached.get(), 1);
            drop(binding);
            assert_eq!(attached.get(), 0);
        }
    }
}
