//! Golden cross-checks of the hand-implemented approximations against
//! statrs reference implementations.

use approx::assert_abs_diff_eq;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

#[test]
fn ln_gamma_matches_statrs() {
    let mut x = 0.1;
    while x <= 50.0 {
        let ours = sl_prob::math::ln_gamma(x);
        let theirs = statrs::function::gamma::ln_gamma(x);
        assert_abs_diff_eq!(ours, theirs, epsilon = 1e-8);
        x += 0.1;
    }
}

#[test]
fn inc_beta_matches_statrs() {
    let shapes = [(0.5, 0.5), (1.0, 3.0), (2.5, 4.0), (8.0, 2.0), (20.0, 20.0)];
    for &(a, b) in &shapes {
        let mut x = 0.02;
        while x < 1.0 {
            let ours = sl_prob::math::inc_beta(x, a, b).unwrap();
            let theirs = statrs::function::beta::beta_reg(a, b, x);
            assert_abs_diff_eq!(ours, theirs, epsilon = 1e-8);
            x += 0.02;
        }
    }
}

#[test]
fn inc_gamma_matches_statrs() {
    let shapes = [0.5, 1.0, 2.5, 5.0, 15.0];
    for &s in &shapes {
        let mut x = 0.1;
        while x <= 3.0 * s + 10.0 {
            let ours = sl_prob::math::inc_gamma_lower(s, x).unwrap();
            let theirs = statrs::function::gamma::gamma_lr(s, x);
            assert_abs_diff_eq!(ours, theirs, epsilon = 1e-7);
            x += 0.1;
        }
    }
}

#[test]
fn normal_cdf_matches_statrs() {
    let n = Normal::new(0.0, 1.0).unwrap();
    let mut z = -6.0;
    while z <= 6.0 {
        let ours = sl_prob::normal::standard_cdf(z);
        assert_abs_diff_eq!(ours, n.cdf(z), epsilon = 1e-6);
        z += 0.05;
    }

    // Non-standard parameters standardize internally.
    let n2 = Normal::new(3.0, 2.5).unwrap();
    for &x in &[-4.0, 0.0, 2.0, 3.0, 5.5, 11.0] {
        let ours = sl_prob::normal::cdf(x, 3.0, 2.5).unwrap();
        assert_abs_diff_eq!(ours, n2.cdf(x), epsilon = 1e-6);
    }
}

#[test]
fn normal_quantile_matches_statrs() {
    let n = Normal::new(0.0, 1.0).unwrap();
    let mut p = 0.001;
    while p < 1.0 {
        let ours = sl_prob::normal::quantile(p).unwrap();
        assert_abs_diff_eq!(ours, n.inverse_cdf(p), epsilon = 1e-6);
        p += 0.001;
    }
}

#[test]
fn student_t_cdf_matches_statrs() {
    for &df in &[1.0, 2.0, 5.0, 12.0, 30.0] {
        let d = StudentsT::new(0.0, 1.0, df).unwrap();
        let mut t = -5.0;
        while t <= 5.0 {
            let ours = sl_prob::student_t::cdf(t, df).unwrap();
            assert_abs_diff_eq!(ours, d.cdf(t), epsilon = 1e-8);
            t += 0.1;
        }
    }
}

#[test]
fn chi_squared_cdf_matches_statrs() {
    for &df in &[1.0, 2.0, 5.0, 10.0, 25.0] {
        let d = ChiSquared::new(df).unwrap();
        let mut x = 0.1;
        while x <= 3.0 * df + 10.0 {
            let ours = sl_prob::chi_squared::cdf(x, df).unwrap();
            assert_abs_diff_eq!(ours, d.cdf(x), epsilon = 1e-7);
            x += 0.1;
        }
    }
}

#[test]
fn fisher_f_cdf_matches_statrs() {
    for &(df1, df2) in &[(1.0, 10.0), (3.0, 12.0), (5.0, 5.0), (10.0, 20.0)] {
        let d = FisherSnedecor::new(df1, df2).unwrap();
        let mut f = 0.1;
        while f <= 10.0 {
            let ours = sl_prob::fisher_f::cdf(f, df1, df2).unwrap();
            assert_abs_diff_eq!(ours, d.cdf(f), epsilon = 1e-8);
            f += 0.1;
        }
    }
}

#[test]
fn critical_values_match_statrs_inverse_cdf() {
    let ps = [0.9, 0.95, 0.975, 0.99];

    for &p in &ps {
        for &df in &[3.0, 8.0, 20.0] {
            let cv = sl_prob::critical::student_t(p, df).unwrap();
            assert!(cv.converged);
            let reference = StudentsT::new(0.0, 1.0, df).unwrap().inverse_cdf(p);
            assert_abs_diff_eq!(cv.value, reference, epsilon = 1e-3);

            let cv = sl_prob::critical::chi_squared(p, df).unwrap();
            assert!(cv.converged);
            let reference = ChiSquared::new(df).unwrap().inverse_cdf(p);
            assert_abs_diff_eq!(cv.value, reference, epsilon = 1e-2);
        }

        let cv = sl_prob::critical::fisher_f(p, 4.0, 15.0).unwrap();
        assert!(cv.converged);
        let reference = FisherSnedecor::new(4.0, 15.0).unwrap().inverse_cdf(p);
        assert_abs_diff_eq!(cv.value, reference, epsilon = 1e-2);
    }
}
