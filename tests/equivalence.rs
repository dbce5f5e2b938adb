use timeline_layout::timeline::{time_point_from_millis, to_epoch_millis};
use timeline_layout::{timeline_for_seed, to_columnar, to_flattened_fields, Error, Timeline};

/// All three representations derived from one seed must agree on every
/// point query: same found/not-found outcome, same value when found.
#[test]
fn representations_agree_on_sampled_points() {
    for seed in (0..100).step_by(7) {
        let canonical = timeline_for_seed(seed).expect("generate");
        let flattened = canonical.to_flattened();
        let columnar = canonical.to_columnar();

        // Coprime stride so probes drift across window boundaries rather
        // than aligning with them.
        for t_ms in (0..2_000_000).step_by(1_771) {
            let t = time_point_from_millis(t_ms).expect("time point");
            let expected = canonical.value_at_time(t);
            assert_eq!(
                flattened.value_at_time(t),
                expected,
                "seed {seed}, t {t_ms} ms: flattened diverged"
            );
            assert_eq!(
                columnar.value_at_time(t),
                expected,
                "seed {seed}, t {t_ms} ms: columnar diverged"
            );
        }
    }
}

/// Boundary probes: exactly at each start (inclusive) and each end
/// (exclusive), the half-open semantics must line up across layouts.
#[test]
fn representations_agree_on_window_boundaries() {
    for seed in 0..25 {
        let canonical = timeline_for_seed(seed).expect("generate");
        let flattened = canonical.to_flattened();
        let columnar = canonical.to_columnar();

        let mut probes_ms = Vec::new();
        for window in canonical.windows() {
            probes_ms.push(to_epoch_millis(window.start));
            probes_ms.push(to_epoch_millis(window.end));
            probes_ms.push(to_epoch_millis(window.end) - 1);
        }
        for t_ms in probes_ms {
            if t_ms < 0 {
                continue;
            }
            let t = time_point_from_millis(t_ms).expect("time point");
            let expected = canonical.value_at_time(t);
            assert_eq!(flattened.value_at_time(t), expected, "seed {seed}, t {t_ms}");
            assert_eq!(columnar.value_at_time(t), expected, "seed {seed}, t {t_ms}");
        }
    }
}

#[test]
fn conversions_preserve_order_and_triples() {
    let canonical = timeline_for_seed(17).expect("generate");
    let flattened = canonical.to_flattened();
    let columnar = canonical.to_columnar();

    assert_eq!(canonical.window_count(), flattened.window_count());
    assert_eq!(canonical.window_count(), columnar.window_count());

    for (i, window) in canonical.windows().iter().enumerate() {
        let packed = flattened.windows()[i];
        assert_eq!(packed.start_ms, to_epoch_millis(window.start));
        assert_eq!(packed.end_ms, to_epoch_millis(window.end));
        assert_eq!(packed.value, window.value);

        assert_eq!(columnar.starts_ms()[i], to_epoch_millis(window.start));
        assert_eq!(columnar.ends_ms()[i], to_epoch_millis(window.end));
        assert_eq!(columnar.values()[i], window.value);
    }
}

#[test]
fn conversion_entry_points_require_canonical_input() {
    let canonical = Timeline::ObjectGraph(timeline_for_seed(3).expect("generate"));
    let flattened = to_flattened_fields(&canonical).expect("flatten");
    let columnar = to_columnar(&canonical).expect("columnar");

    assert!(matches!(flattened, Timeline::Flattened(_)));
    assert!(matches!(columnar, Timeline::Columnar(_)));

    assert!(matches!(
        to_flattened_fields(&flattened),
        Err(Error::NotCanonical(_))
    ));
    assert!(matches!(to_columnar(&columnar), Err(Error::NotCanonical(_))));
    assert!(matches!(
        to_columnar(&flattened),
        Err(Error::NotCanonical(_))
    ));
}
