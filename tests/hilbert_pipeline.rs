use semigroup_hilbert::prelude::*;

fn gens(v: &[u64]) -> Generators {
    Generators::new(v.to_vec()).expect("valid generators")
}

fn coefs(v: &[&[usize]]) -> Vec<Vec<usize>> {
    v.iter().map(|c| c.to_vec()).collect()
}

#[test]
fn three_four_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let generators = gens(&[3, 4]);
    let pipeline = HilbertPipeline::new(&generators, HilbertConfig::default())?;
    assert_eq!(pipeline.c(), 6);
    assert_eq!(pipeline.analysis().frobenius, Some(5));

    let report = pipeline.report()?;
    assert_eq!(report.printed_levels().count(), 6);
    assert_eq!(
        report.coefficients(),
        coefs(&[&[1], &[1, 1], &[1, 1, 1], &[1, 1, 2], &[1, 1, 2], &[1, 1, 2, 1]])
    );
    Ok(())
}

#[test]
fn three_five_polynomials() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        get_poly_coef(&gens(&[3, 5]))?,
        coefs(&[
            &[1],
            &[1, 1],
            &[1, 1, 1],
            &[1, 1, 2],
            &[1, 1, 2, 1],
            &[1, 1, 2, 2],
            &[1, 1, 2, 2],
            &[1, 1, 2, 2, 1],
        ])
    );
    Ok(())
}

#[test]
fn four_five_polynomials_including_level_c() -> Result<(), Box<dyn std::error::Error>> {
    let polys = get_polynomial(&gens(&[4, 5]))?;
    assert_eq!(polys.len(), 13);
    let all: Vec<Vec<usize>> = polys.iter().map(|p| p.to_coef_list()).collect();
    assert_eq!(
        all,
        coefs(&[
            &[1],
            &[1, 1],
            &[1, 1, 1],
            &[1, 1, 2, 1],
            &[1, 1, 2, 2],
            &[1, 1, 2, 3, 1],
            &[1, 1, 2, 3, 2],
            &[1, 1, 2, 3, 3, 1],
            &[1, 1, 2, 3, 3, 2],
            &[1, 1, 2, 3, 3, 3],
            &[1, 1, 2, 3, 3, 3],
            &[1, 1, 2, 3, 3, 3, 1],
            &[1, 1, 2, 3, 3, 3, 1],
        ])
    );
    Ok(())
}

#[test]
fn default_generators_report() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = HilbertPipeline::new(&gens(&[4, 6, 13]), HilbertConfig::default())?;
    let report = pipeline.report()?;
    assert_eq!(report.frobenius, 15);
    assert_eq!(report.c, 16);
    assert_eq!(report.gamma.len(), 40);
    assert_eq!(
        report.level_sizes,
        vec![1, 3, 4, 6, 7, 10, 11, 14, 15, 18, 19, 21, 22, 24, 24, 25, 25]
    );
    assert_eq!(
        report.coefficients(),
        coefs(&[
            &[1],
            &[1, 1, 1],
            &[1, 2, 1],
            &[1, 1, 3, 1],
            &[1, 1, 3, 2],
            &[1, 1, 3, 3, 2],
            &[1, 1, 2, 4, 3],
            &[1, 1, 2, 4, 4, 2],
            &[1, 1, 2, 3, 5, 3],
            &[1, 1, 2, 3, 5, 4, 2],
            &[1, 1, 2, 3, 4, 5, 3],
            &[1, 1, 2, 3, 4, 5, 4, 1],
            &[1, 1, 2, 3, 4, 4, 5, 2],
            &[1, 1, 2, 3, 4, 4, 6, 3],
            &[1, 1, 2, 3, 4, 4, 6, 3],
            &[1, 1, 2, 3, 4, 4, 6, 3, 1],
        ])
    );
    Ok(())
}

#[test]
fn coefficient_sums_match_level_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let report = HilbertPipeline::new(&gens(&[3, 7]), HilbertConfig::default())?.report()?;
    let sums: Vec<usize> = report.polynomials.iter().map(|p| p.coefficient_sum()).collect();
    assert_eq!(sums, report.level_sizes);
    Ok(())
}

#[test]
fn generator_order_changes_gamma_tail() -> Result<(), Box<dyn std::error::Error>> {
    let a = HilbertPipeline::new(&gens(&[3, 4]), HilbertConfig::default())?;
    let b = HilbertPipeline::new(&gens(&[4, 3]), HilbertConfig::default())?;
    assert_eq!(a.analysis().gaps, b.analysis().gaps);
    assert_eq!(a.gamma().elements().last(), Some(&11));
    assert_eq!(b.gamma().elements().last(), Some(&17));
    Ok(())
}

#[test]
fn report_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let report = HilbertPipeline::new(&gens(&[3, 4]), HilbertConfig::default())?.report()?;
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["generators"], serde_json::json!([3, 4]));
    assert_eq!(json["frobenius"], 5);
    assert_eq!(json["gaps"], serde_json::json!([1, 2, 5]));
    assert_eq!(json["polynomials"][5], serde_json::json!([1, 1, 2, 1]));
    Ok(())
}

#[test]
fn errors_identify_the_failing_stage() {
    assert_eq!(
        HilbertPipeline::new(&gens(&[1, 4]), HilbertConfig::default()).unwrap_err(),
        HilbertError::NoFrobeniusNumber
    );
    assert!(matches!(
        get_polynomial(&gens(&[2, 5])),
        Err(HilbertError::LevelsExhausted { .. })
    ));
    assert_eq!(
        Generators::new(vec![6, 9]).unwrap_err(),
        HilbertError::NotCoprime { gcd: 3 }
    );
}
