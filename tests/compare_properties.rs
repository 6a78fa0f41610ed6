//! Property tests for the comparison kernels.

mod common;

use common::{array_from_options, as_bool, bool_options, null_count, slow_compare, slow_compare_scalar, value_bits};
use compare_kernels::{
    cmp_array_array, cmp_array_scalar, cmp_scalar_array, compare, CompareOptions, ComparisonOperator, Datum,
    KernelContext, PrimitiveScalar,
};
use minarrow::FloatArray;
use proptest::prelude::*;

fn arb_op() -> impl Strategy<Value = ComparisonOperator> {
    prop::sample::select(ComparisonOperator::ALL.to_vec())
}

fn arb_values(max_len: usize) -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::weighted(0.8, -20i32..20), 0..max_len)
}

fn arb_scalar() -> impl Strategy<Value = Option<i32>> {
    prop::option::weighted(0.9, -20i32..20)
}

fn arb_pair(max_len: usize) -> impl Strategy<Value = (Vec<Option<i32>>, Vec<Option<i32>>)> {
    (0..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(prop::option::weighted(0.8, -20i32..20), len),
            prop::collection::vec(prop::option::weighted(0.8, -20i32..20), len),
        )
    })
}

fn arb_float() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -4.0f64..4.0,
        1 => Just(f64::NAN),
        1 => Just(0.0f64),
    ]
}

fn scalar_of(value: Option<i32>) -> PrimitiveScalar<i32> {
    match value {
        Some(v) => PrimitiveScalar::new(v),
        None => PrimitiveScalar::null(),
    }
}

fn column(values: &[Option<i32>]) -> Datum {
    Datum::from(array_from_options(values))
}

fn ctx() -> KernelContext {
    KernelContext::default()
}

proptest! {
    #[test]
    fn validity_is_and_of_operands((lhs, rhs) in arb_pair(300), op in arb_op()) {
        let (a, b) = (column(&lhs), column(&rhs));
        let out = cmp_array_array(
            &ctx(),
            a.as_primitive::<i32>().unwrap(),
            b.as_primitive::<i32>().unwrap(),
            CompareOptions::new(op),
        )
        .unwrap();
        prop_assert_eq!(out.len, lhs.len());
        let cells = bool_options(&out);
        for i in 0..lhs.len() {
            prop_assert_eq!(cells[i].is_some(), lhs[i].is_some() && rhs[i].is_some());
        }
    }

    #[test]
    fn agrees_with_reference(values in arb_values(300), scalar in arb_scalar(), op in arb_op()) {
        let datum = column(&values);
        let array = datum.as_primitive::<i32>().unwrap();
        let options = CompareOptions::new(op);
        let s = scalar_of(scalar);

        let out = cmp_array_scalar(&ctx(), array, &s, options);
        prop_assert_eq!(bool_options(&out), slow_compare_scalar(op, &values, scalar, false));
        let out = cmp_scalar_array(&ctx(), &s, array, options);
        prop_assert_eq!(bool_options(&out), slow_compare_scalar(op, &values, scalar, true));
    }

    #[test]
    fn arrays_agree_with_reference((lhs, rhs) in arb_pair(300), op in arb_op()) {
        let out = compare(&ctx(), &column(&lhs), &column(&rhs), CompareOptions::new(op)).unwrap();
        prop_assert_eq!(bool_options(as_bool(&out)), slow_compare(op, &lhs, &rhs));
    }

    #[test]
    fn null_scalar_nulls_everything(values in arb_values(300), op in arb_op()) {
        let array = column(&values);
        let null = Datum::from(PrimitiveScalar::<i32>::null());
        let out = compare(&ctx(), &array, &null, CompareOptions::new(op)).unwrap();
        let result = as_bool(&out);
        prop_assert_eq!(result.len, values.len());
        prop_assert_eq!(null_count(result), values.len());
        prop_assert!(value_bits(result).iter().all(|bit| !bit));
    }

    #[test]
    fn operators_are_complementary((lhs, rhs) in arb_pair(200)) {
        let (a, b) = (column(&lhs), column(&rhs));
        let (a, b) = (a.as_primitive::<i32>().unwrap(), b.as_primitive::<i32>().unwrap());
        let run = |op| bool_options(&cmp_array_array(&ctx(), a, b, CompareOptions::new(op)).unwrap());
        let eq = run(ComparisonOperator::Equals);
        let ne = run(ComparisonOperator::NotEquals);
        let lt = run(ComparisonOperator::LessThan);
        let le = run(ComparisonOperator::LessThanOrEqualTo);
        let gt = run(ComparisonOperator::GreaterThan);
        let ge = run(ComparisonOperator::GreaterThanOrEqualTo);

        for i in 0..lhs.len() {
            let (Some(e), Some(l), Some(g)) = (eq[i], lt[i], gt[i]) else {
                prop_assert!(ne[i].is_none() && le[i].is_none() && ge[i].is_none());
                continue;
            };
            prop_assert_eq!(e as u8 + l as u8 + g as u8, 1, "position {}", i);
            prop_assert_eq!(ne[i], Some(!e));
            prop_assert_eq!(ge[i], Some(g || e));
            prop_assert_eq!(le[i], Some(l || e));
        }
    }

    #[test]
    fn scalar_side_flips_operator(values in arb_values(300), scalar in -20i32..20, op in arb_op()) {
        let array = column(&values);
        let s = Datum::from(PrimitiveScalar::new(scalar));
        let forward = compare(&ctx(), &array, &s, CompareOptions::new(op)).unwrap();
        let backward = compare(&ctx(), &s, &array, CompareOptions::new(op.flip())).unwrap();
        prop_assert_eq!(bool_options(as_bool(&forward)), bool_options(as_bool(&backward)));
        prop_assert_eq!(value_bits(as_bool(&forward)), value_bits(as_bool(&backward)));
    }

    #[test]
    fn negated_operator_inverts_valid_bits(values in arb_values(300), scalar in -20i32..20, op in arb_op()) {
        let datum = column(&values);
        let array = datum.as_primitive::<i32>().unwrap();
        let s = PrimitiveScalar::new(scalar);
        let out = cmp_array_scalar(&ctx(), array, &s, CompareOptions::new(op));
        let neg = cmp_array_scalar(&ctx(), array, &s, CompareOptions::new(op.negate()));
        let inverted: Vec<Option<bool>> = bool_options(&out).into_iter().map(|v| v.map(|b| !b)).collect();
        prop_assert_eq!(bool_options(&neg), inverted);
    }

    #[test]
    fn slicing_does_not_change_results(
        values in arb_values(400),
        start in 0usize..400,
        len in 0usize..400,
        scalar in arb_scalar(),
        op in arb_op(),
    ) {
        let start = start.min(values.len());
        let len = len.min(values.len() - start);
        let base = column(&values);
        let sliced = base.slice(start, len);
        let copied = column(&values[start..start + len]);
        let (sliced_view, copied_view) = (sliced.as_primitive::<i32>().unwrap(), copied.as_primitive::<i32>().unwrap());
        let s = scalar_of(scalar);
        let options = CompareOptions::new(op);

        let a = cmp_array_scalar(&ctx(), sliced_view, &s, options);
        let b = cmp_array_scalar(&ctx(), copied_view, &s, options);
        prop_assert_eq!(bool_options(&a), bool_options(&b));
        prop_assert_eq!(value_bits(&a), value_bits(&b));

        let c = cmp_array_array(&ctx(), sliced_view, copied_view, options).unwrap();
        prop_assert_eq!(bool_options(&c), slow_compare(op, &values[start..start + len], &values[start..start + len]));
    }

    #[test]
    fn floats_follow_ieee(values in prop::collection::vec(arb_float(), 0..200), scalar in arb_float(), op in arb_op()) {
        let array = FloatArray::<f64>::from_slice(&values);
        let out = cmp_array_scalar(&ctx(), (&array, 0, values.len()).into(), &PrimitiveScalar::new(scalar), CompareOptions::new(op));
        let expected: Vec<bool> = values.iter().map(|v| op.apply(v, &scalar)).collect();
        prop_assert!(out.null_mask.is_none());
        prop_assert_eq!(value_bits(&out), expected);
    }
}
