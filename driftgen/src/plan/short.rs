//! Short plan: 17 method renames followed by 10 Javadoc drift edits.

use crate::core::types::{ExpectedCounts, Plan, ReplaceMode};
use crate::error::HistoryError;
use crate::plan::builder::PlanBuilder;
use crate::plan::{CALCULATOR as C, COLLECTION_UTILS as L, DATE_UTILS as D, TEXT_TOOLKIT as T};

const RENAME: &str = "REFACTOR: rename {from} to {to}";
const DRIFT: &str = "JAVADOC: drift {name}";

pub(super) fn plan(expected: ExpectedCounts) -> Result<Plan, HistoryError> {
    let mut b = PlanBuilder::new("short", expected, ReplaceMode::First);
    b.declare_all(&[
        ("Calculator.add", "add"),
        ("Calculator.divide", "divide"),
        ("TextToolkit.reverse", "reverse"),
        ("TextToolkit.toTitleCase", "toTitleCase"),
        ("TextToolkit.isPalindrome", "isPalindrome"),
        ("TextToolkit.slugify", "slugify"),
        ("DateUtils.daysBetween", "daysBetween"),
        ("DateUtils.formatDate", "formatDate"),
        ("CollectionUtils.sum", "sum"),
        ("CollectionUtils.max", "max"),
        ("CollectionUtils.distinct", "distinct"),
    ])?;

    // Calculator
    b.rename(RENAME, C, "Calculator.add", "public int {name}(", "addNumbers")?;
    b.revise(
        "REFACTOR: rename params a,b to left,right",
        C,
        "Calculator.add",
        &[
            ("public int {name}(int a, int b)", "public int {name}(int left, int right)"),
            ("return a + b;", "return left + right;"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.divide", "public double {name}(", "safeDivide")?;
    b.rename(RENAME, C, "Calculator.divide", "public double {name}(", "divideSafely")?;

    // TextToolkit
    b.rename(RENAME, T, "TextToolkit.reverse", "public String {name}(", "reverseText")?;
    b.rename(RENAME, T, "TextToolkit.reverse", "public String {name}(", "reverseContent")?;
    b.rename(RENAME, T, "TextToolkit.toTitleCase", "public String {name}(", "titleCase")?;
    b.rename(RENAME, T, "TextToolkit.isPalindrome", "public boolean {name}(", "palindromeCheck")?;
    b.rename(RENAME, T, "TextToolkit.slugify", "public String {name}(", "slug")?;
    b.rename(RENAME, T, "TextToolkit.slugify", "public String {name}(", "makeSlug")?;

    // DateUtils
    b.rename(RENAME, D, "DateUtils.daysBetween", "public long {name}(", "daysDiff")?;
    b.rename(RENAME, D, "DateUtils.daysBetween", "public long {name}(", "daysBetweenDates")?;
    b.rename(RENAME, D, "DateUtils.formatDate", "public String {name}(", "format")?;

    // CollectionUtils
    b.rename(RENAME, L, "CollectionUtils.sum", "public int {name}(", "sumValues")?;
    b.rename(RENAME, L, "CollectionUtils.sum", "public int {name}(", "sumAll")?;
    b.rename(RENAME, L, "CollectionUtils.max", "public int {name}(", "maxValue")?;
    b.rename(RENAME, L, "CollectionUtils.distinct", "public List<String> {name}(", "unique")?;

    // Javadoc drift
    b.document(DRIFT, C, "Calculator.add", &[("Adds two integers.", "Adds three integers.")])?;
    b.document(
        DRIFT,
        C,
        "Calculator.divide",
        &[("    * Divides dividend by divisor.", "    * Divides with truncation.")],
    )?;
    b.document(
        DRIFT,
        T,
        "TextToolkit.reverse",
        &[("Reverses the provided text.", "Reverses content (doc drift).")],
    )?;
    b.document(
        DRIFT,
        T,
        "TextToolkit.toTitleCase",
        &[("Converts text to title case", "Converts to sentence case")],
    )?;
    b.document(
        DRIFT,
        T,
        "TextToolkit.isPalindrome",
        &[("Checks if the provided text is a palindrome.", "Checks if text is anagram.")],
    )?;
    b.document(
        DRIFT,
        D,
        "DateUtils.daysBetween",
        &[(
            "Calculates the number of days between two dates.",
            "Calculates weeks between dates.",
        )],
    )?;
    b.document(
        DRIFT,
        D,
        "DateUtils.formatDate",
        &[("Formats a date using the given pattern.", "Formats date using ISO only.")],
    )?;
    b.document(
        DRIFT,
        L,
        "CollectionUtils.sum",
        &[("Sums the integers in the list.", "Sums and divides by length.")],
    )?;
    b.document(
        DRIFT,
        L,
        "CollectionUtils.max",
        &[("Returns the maximum integer in the list.", "Returns minimum per docs.")],
    )?;
    b.document(
        DRIFT,
        L,
        "CollectionUtils.distinct",
        &[("Returns distinct elements", "Returns sorted distinct elements")],
    )?;

    Ok(b.build())
}
