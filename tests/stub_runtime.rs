use mpwrap::runtime::{Runtime, StubRuntime, STUB_WORLD_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stub_accepts_any_arguments(args in proptest::collection::vec(".*", 0..8)) {
        let rt = StubRuntime::initialize(&args).unwrap();
        prop_assert_eq!(rt.rank().unwrap(), 0);
        prop_assert_eq!(rt.size().unwrap(), STUB_WORLD_SIZE);
        prop_assert!(rt.finalize().is_ok());
    }
}

#[test]
fn stub_world_size_is_zero() {
    // Known quirk: a lone process reports size 0, not 1.
    assert_eq!(STUB_WORLD_SIZE, 0);
    assert_eq!(<StubRuntime as Runtime>::NAME, "stub");
}
