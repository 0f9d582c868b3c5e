use proptest::prelude::*;
use skewer::{find_interceptions, Interception, Ray, SkewerError};
use skewer_integers::{Integer, Rational};
use skewer_solve::{SolveConfig, SolveError};

type Scenario = ([i64; 3], [i64; 3], [i64; 3], [[i64; 3]; 3]);

/// A line, three distinct meeting times and three ray velocities that
/// differ from the line's velocity.
fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (
        prop::array::uniform3(-20i64..=20),
        prop::array::uniform3(-5i64..=5),
        prop::sample::subsequence((1i64..=10).collect::<Vec<_>>(), 3).prop_shuffle(),
        prop::array::uniform3(prop::array::uniform3(-5i64..=5)),
    )
        .prop_filter("ray velocity equals line velocity", |(_, v, _, vs)| {
            vs.iter().all(|vi| vi != v)
        })
        .prop_map(|(p, v, t, vs)| (p, v, [t[0], t[1], t[2]], vs))
}

fn rays_through(p: [i64; 3], v: [i64; 3], t: [i64; 3], vs: [[i64; 3]; 3]) -> [Ray; 3] {
    std::array::from_fn(|i| {
        let position = std::array::from_fn(|a| p[a] + t[i] * (v[a] - vs[i][a]));
        Ray::from_i64(position, vs[i])
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: rays built from a known line give that line back
    #[test]
    fn known_line_is_recovered((p, v, t, vs) in arb_scenario()) {
        let rays = rays_through(p, v, t, vs);
        let result = find_interceptions(&rays, &SolveConfig::default());
        // Degenerate configurations leave a whole family of lines.
        prop_assume!(!matches!(
            result,
            Err(SkewerError::Solve(SolveError::PositiveDimensional { .. }))
        ));
        let found = result.map_err(|e| TestCaseError::fail(e.to_string()))?;

        let expected = Interception {
            position: p.map(Rational::from),
            velocity: v.map(Rational::from),
            times: t.map(Rational::from),
        };
        prop_assert!(
            found.contains(&expected),
            "{:?} not among {:?}",
            expected,
            found
        );
        for line in &found {
            for (i, ray) in rays.iter().enumerate() {
                prop_assert!(line.meets(ray, i));
            }
        }
    }

    /// Property: Display output parses back to the same ray, every time
    #[test]
    fn ray_display_round_trips(
        p in prop::array::uniform3(any::<i64>()),
        v in prop::array::uniform3(any::<i64>()),
    ) {
        let ray = Ray::new(p.map(Integer::new), v.map(Integer::new));
        let text = ray.to_string();
        let parsed: Ray = text.parse().unwrap();
        prop_assert_eq!(&parsed, &ray);
        prop_assert_eq!(&text.parse::<Ray>().unwrap(), &parsed);
        prop_assert_eq!(parsed.to_string(), text);
    }
}
