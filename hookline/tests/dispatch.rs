//! Dispatch laws of the hook registry, exercised through the façade.

use hookline::{
    Core, CoreApiExt, HookName, HookRegistry, Identity, Record, hooks, listener_fn, record,
    testing::{CallLog, FailingListener, RecordingListener, TaggedListener},
};

mod common;
use common::{ExplodingListener, IdRecordingListener, sink};

fn name(s: &str) -> HookName {
    HookName::new(s).unwrap()
}

#[test]
fn test_dispatch_without_listeners_is_noop() {
    let core: Core<_> = Core::new(Identity);
    for hook in ["afterProcess", "never-registered", "x"] {
        assert!(core.dispatch(hook, &record! { "foo": "bar" }).is_ok());
    }
    assert!(core.registry().is_empty());
}

#[test]
fn test_dispatch_order_matches_registration_order() {
    let seen = sink();
    let mut core: Core<_> = Core::new(Identity);
    for id in 0..5 {
        core.listen(
            hooks::AFTER_PROCESS,
            IdRecordingListener {
                id,
                seen: seen.clone(),
            },
        );
    }

    core.dispatch("afterProcess", &record! { "n": 1 }).unwrap();

    let ids: Vec<usize> = seen.borrow().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4], "Listeners should run in registration order");
}

#[test]
fn test_no_cross_invocation_between_names() {
    let a = RecordingListener::<Record>::new();
    let b = RecordingListener::<Record>::new();
    let mut core: Core<_> = Core::new(Identity);
    core.listen(name("a"), a.clone());
    core.listen(name("b"), b.clone());

    core.dispatch("a", &record! { "x": 1 }).unwrap();

    assert_eq!(a.count(), 1);
    assert_eq!(b.count(), 0, "listener registered only under `b` must not fire");
}

#[test]
fn test_repeated_dispatch_produces_identical_sequences() {
    let log = CallLog::new();
    let mut core: Core<_> = Core::new(Identity);
    core.listen(name("tick"), TaggedListener::new("first", &log));
    core.listen(name("tick"), TaggedListener::new("second", &log));
    core.listen(name("tick"), TaggedListener::new("third", &log));

    let args = record! { "same": true };
    core.dispatch("tick", &args).unwrap();
    core.dispatch("tick", &args).unwrap();

    let entries = log.entries();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[..3], entries[3..]);
}

#[test]
fn test_failing_listener_aborts_remaining_listeners() {
    let ran = sink();
    let later = RecordingListener::<Record>::new();
    let mut core: Core<_> = Core::new(Identity);
    core.listen(name("save"), ExplodingListener { ran: ran.clone() });
    core.listen(name("save"), later.clone());

    let err = core.dispatch("save", &Record::new()).unwrap_err();

    assert_eq!(*ran.borrow(), vec!["exploding"]);
    assert_eq!(later.count(), 0, "listener B must never execute");
    assert_eq!(err.hook(), "save");
    assert_eq!(err.index(), 0);
    assert_eq!(err.into_source().to_string(), "listener exploded");
}

#[test]
fn test_failure_is_not_swallowed_on_later_dispatches() {
    let failing = FailingListener::new("still failing");
    let mut core: Core<_> = Core::new(Identity);
    core.listen(name("save"), failing.clone());

    assert!(core.dispatch("save", &Record::new()).is_err());
    assert!(core.dispatch("save", &Record::new()).is_err());
    assert_eq!(failing.calls(), 2);
}

#[test]
fn test_listeners_may_mutate_shared_state() {
    let counter = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut core: Core<_> = Core::new(Identity);
    for _ in 0..3 {
        let counter = counter.clone();
        core.on(name("bump"), move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });
    }

    core.dispatch("bump", &Record::new()).unwrap();
    assert_eq!(counter.get(), 3);
}

#[test]
fn test_registry_with_typed_tuple_arguments() {
    let log = CallLog::new();
    let sink = log.clone();
    let mut registry = HookRegistry::<(String, u32)>::new();
    registry.register(
        name("scored"),
        listener_fn(move |(who, score): &(String, u32)| {
            sink.push(format!("{who}:{score}"));
            Ok(())
        }),
    );

    registry.dispatch("scored", &("ada".to_string(), 3)).unwrap();
    assert_eq!(log.entries(), vec!["ada:3".to_string()]);
}
