use approx::assert_relative_eq;
use statys::*;

const X: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
const Y: [f64; 6] = [0.07, 0.14, 0.72, 0.32, 0.59, 0.43];

fn pair() -> Distribution {
    Distribution::new([X.to_vec(), Y.to_vec()]).unwrap()
}

fn repeated() -> Distribution {
    Distribution::new([vec![X.to_vec(), X.to_vec()]]).unwrap()
}

#[test]
fn wilcoxon_signed_rank_pair() {
    let output = wilcoxon::signed_rank(&pair(), 0.05).unwrap();
    assert_eq!(output["arg0-arg1"].as_tuple(), (0, 0.15625));
}

#[test]
fn wilcoxon_rank_sum_pair() {
    let output = wilcoxon::rank_sum(&pair(), 0.05).unwrap();
    let (h, p) = output["arg0-arg1"].as_tuple();
    assert_eq!(h, 0);
    assert_relative_eq!(p, 0.3366683676100388, epsilon = 1e-12);
}

#[test]
fn mann_whitney_pair() {
    let output = mann_whitney::u_test(&pair(), 0.05).unwrap();
    let (h, p) = output["arg0-arg1"].as_tuple();
    assert_eq!(h, 0);
    assert_relative_eq!(p, 0.3939393939393939, epsilon = 1e-12);
}

#[test]
fn descriptive_measures() {
    let d = Distribution::new([X.to_vec()]).unwrap();
    assert_relative_eq!(measure::mean(&d)["arg0"], 0.25, epsilon = 1e-15);
    assert_relative_eq!(measure::std(&d)["arg0"], 0.1707825127659933, epsilon = 1e-14);
    assert_relative_eq!(measure::var(&d)["arg0"], 0.029166666666666664, epsilon = 1e-15);
    assert_eq!(measure::max(&d)["arg0"], 0.5);
    assert_eq!(measure::min(&d)["arg0"], 0.0);
    assert_relative_eq!(measure::median(&d)["arg0"], 0.25, epsilon = 1e-15);
    assert_relative_eq!(measure::kurtosis(&d)["arg0"], -1.268571428571428, epsilon = 1e-12);
}

#[test]
fn friedman_repeated_measures() {
    let output = friedman::friedman(&repeated(), Axis::default()).unwrap();
    let ((f, dof), (iman, f_dof)) = output["arg0"].as_tuple();
    assert_relative_eq!(f, 10.76923076923077, epsilon = 1e-12);
    assert_eq!(dof, 11);
    assert_eq!(iman, 0.0);
    assert_eq!(f_dof, (11, 0));
}

#[test]
fn nemenyi_critical_difference() {
    let output = friedman_with_posthoc(&repeated(), 0.05, "nemenyi", Axis::At(1)).unwrap();
    let cd = &output["arg0"];
    assert_eq!(cd.average_ranks.len(), 6);
    assert_eq!(cd.cd, 5.331310596344878);
    // every treatment lies within one CD of the others
    assert_eq!(cd.groups(), vec![vec![0, 1, 2, 3, 4, 5]]);
}

#[test]
fn post_hoc_from_config() {
    let config: PostHocConfig = PostHocConfig::new(0.05, "nemenyi".parse().unwrap(), Axis::At(1));
    let output = config.run(&repeated()).unwrap();
    assert_eq!(output["arg0"].cd, 5.331310596344878);
}

#[test]
fn unsupported_alpha_is_a_configuration_error() {
    let err = friedman_with_posthoc(&repeated(), 0.07, "nemenyi", Axis::At(1)).unwrap_err();
    assert!(matches!(err, StatysError::Configuration(_)));
}

#[test]
fn csv_to_tables() {
    let data = "x,y\n0,0.07\n0.1,0.14\n0.2,0.72\n0.3,0.32\n0.4,0.59\n0.5,0.43\n";
    let d = Distribution::from_reader(data.as_bytes()).unwrap();
    assert_eq!(d, pair());

    let output = wilcoxon::signed_rank(&d, 0.05).unwrap();
    let table = display::hypothesis_table(&output, Some(&["x", "y"][..]), None).unwrap();
    assert!(table.contains("🟢 0"));
}
