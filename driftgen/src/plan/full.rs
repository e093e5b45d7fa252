//! Full plan: every public method of the baseline is renamed and has its
//! parameters renamed, six methods are renamed a second time, then every
//! method gets one Javadoc drift edit.

use crate::core::types::{ExpectedCounts, Plan, ReplaceMode};
use crate::error::HistoryError;
use crate::plan::builder::PlanBuilder;
use crate::plan::{CALCULATOR as C, COLLECTION_UTILS as L, DATE_UTILS as D, TEXT_TOOLKIT as T};

const RENAME_AGAIN: &str = "REFACTOR: rename {from} to {to}";
const DRIFT: &str = "JAVADOC: drift {name} description";
const DRIFT_PARAMS: &str = "JAVADOC: drift parameter order {name}";

pub(super) fn plan(expected: ExpectedCounts) -> Result<Plan, HistoryError> {
    let mut b = PlanBuilder::new("full", expected, ReplaceMode::All);
    b.declare_all(&[
        ("Calculator.add", "add"),
        ("Calculator.subtract", "subtract"),
        ("Calculator.multiply", "multiply"),
        ("Calculator.divide", "divide"),
        ("Calculator.modulo", "modulo"),
        ("Calculator.power", "power"),
        ("Calculator.average", "average"),
        ("TextToolkit.reverse", "reverse"),
        ("TextToolkit.toTitleCase", "toTitleCase"),
        ("TextToolkit.isPalindrome", "isPalindrome"),
        ("TextToolkit.wordCount", "wordCount"),
        ("TextToolkit.slugify", "slugify"),
        ("DateUtils.daysBetween", "daysBetween"),
        ("DateUtils.addDays", "addDays"),
        ("DateUtils.startOfWeek", "startOfWeek"),
        ("DateUtils.formatDate", "formatDate"),
        ("DateUtils.parseDate", "parseDate"),
        ("CollectionUtils.sum", "sum"),
        ("CollectionUtils.max", "max"),
        ("CollectionUtils.distinct", "distinct"),
        ("CollectionUtils.merge", "merge"),
        ("CollectionUtils.chunk", "chunk"),
    ])?;

    calculator(&mut b)?;
    text_toolkit(&mut b)?;
    date_utils(&mut b)?;
    collection_utils(&mut b)?;

    b.rename(RENAME_AGAIN, C, "Calculator.add", "{name}(", "addValues")?;
    b.rename(RENAME_AGAIN, T, "TextToolkit.reverse", "{name}(", "reverseContent")?;
    b.rename(RENAME_AGAIN, D, "DateUtils.daysBetween", "{name}(", "daysBetweenDates")?;
    b.rename(RENAME_AGAIN, L, "CollectionUtils.sum", "{name}(", "sumAll")?;
    b.rename(RENAME_AGAIN, C, "Calculator.divide", "{name}(", "divideSafely")?;
    b.rename(RENAME_AGAIN, T, "TextToolkit.slugify", "{name}(", "makeSlug")?;

    javadoc(&mut b)?;

    Ok(b.build())
}

fn calculator(b: &mut PlanBuilder) -> Result<(), HistoryError> {
    const RENAME: &str = "REFACTOR: rename Calculator.{from} to {to}";

    b.rename(RENAME, C, "Calculator.add", "int {name}(", "addNumbers")?;
    b.revise(
        "REFACTOR: rename params a,b to left,right in {name}",
        C,
        "Calculator.add",
        &[
            ("{name}(int a, int b)", "{name}(int left, int right)"),
            ("return a + b;", "return left + right;"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.subtract", "int {name}(", "subtractNumbers")?;
    b.revise(
        "REFACTOR: rename params a,b to minuend,subtrahend in {name}",
        C,
        "Calculator.subtract",
        &[
            ("{name}(int a, int b)", "{name}(int minuend, int subtrahend)"),
            ("return a - b;", "return minuend - subtrahend;"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.multiply", "int {name}(", "multiplyNumbers")?;
    b.revise(
        "REFACTOR: rename params a,b to first,second in {name}",
        C,
        "Calculator.multiply",
        &[
            ("{name}(int a, int b)", "{name}(int first, int second)"),
            ("return a * b;", "return first * second;"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.divide", "double {name}(", "safeDivide")?;
    b.revise(
        "REFACTOR: rename params dividend,divisor to numerator,denominator in {name}",
        C,
        "Calculator.divide",
        &[
            (
                "{name}(double dividend, double divisor)",
                "{name}(double numerator, double denominator)",
            ),
            ("dividend / divisor", "numerator / denominator"),
            ("divisor == 0", "denominator == 0"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.modulo", "int {name}(", "safeModulo")?;
    b.revise(
        "REFACTOR: rename params a,b to dividend,divisor in {name}",
        C,
        "Calculator.modulo",
        &[
            ("{name}(int a, int b)", "{name}(int dividend, int divisor)"),
            ("return a % b;", "return dividend % divisor;"),
            ("b == 0", "divisor == 0"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.power", "double {name}(", "powerOf")?;
    b.revise(
        "REFACTOR: rename params base,exponent to baseVal,expVal in {name}",
        C,
        "Calculator.power",
        &[
            (
                "{name}(double base, double exponent)",
                "{name}(double baseVal, double expVal)",
            ),
            ("return Math.pow(base, exponent);", "return Math.pow(baseVal, expVal);"),
        ],
    )?;
    b.rename(RENAME, C, "Calculator.average", "double {name}(", "meanOf")?;
    b.revise(
        "REFACTOR: rename params a,b to first,second in {name}",
        C,
        "Calculator.average",
        &[
            ("{name}(int a, int b)", "{name}(int first, int second)"),
            ("return (a + b) / 2.0;", "return (first + second) / 2.0;"),
        ],
    )?;
    Ok(())
}

// Every TextToolkit method takes `input`, so the shared null checks are
// replaced one method at a time.
fn text_toolkit(b: &mut PlanBuilder) -> Result<(), HistoryError> {
    const RENAME: &str = "REFACTOR: rename TextToolkit.{from} to {to}";
    const PARAM: &str = "REFACTOR: rename param input to text in {name}";

    b.rename(RENAME, T, "TextToolkit.reverse", "String {name}(", "reverseText")?;
    b.revise(
        PARAM,
        T,
        "TextToolkit.reverse",
        &[
            ("{name}(String input)", "{name}(String text)"),
            ("if (input == null)", "if (text == null)"),
            ("input).reverse()", "text).reverse()"),
        ],
    )?
    .with_mode(ReplaceMode::First);
    b.rename(RENAME, T, "TextToolkit.toTitleCase", "String {name}(", "titleCase")?;
    b.revise(
        PARAM,
        T,
        "TextToolkit.toTitleCase",
        &[
            ("{name}(String input)", "{name}(String text)"),
            ("if (input == null", "if (text == null"),
            ("input.isEmpty()", "text.isEmpty()"),
            ("input.toLowerCase", "text.toLowerCase"),
            ("return input;", "return text;"),
        ],
    )?
    .with_mode(ReplaceMode::First);
    b.rename(RENAME, T, "TextToolkit.isPalindrome", "boolean {name}(", "palindromeCheck")?;
    b.revise(
        PARAM,
        T,
        "TextToolkit.isPalindrome",
        &[
            ("{name}(String input)", "{name}(String text)"),
            ("if (input == null)", "if (text == null)"),
            ("input.replaceAll", "text.replaceAll"),
        ],
    )?
    .with_mode(ReplaceMode::First);
    b.rename(RENAME, T, "TextToolkit.wordCount", "int {name}(", "countWords")?;
    b.revise(
        PARAM,
        T,
        "TextToolkit.wordCount",
        &[
            ("{name}(String input)", "{name}(String text)"),
            ("if (input == null", "if (text == null"),
            ("input.isBlank()", "text.isBlank()"),
            ("input.trim()", "text.trim()"),
        ],
    )?
    .with_mode(ReplaceMode::First);
    b.rename(RENAME, T, "TextToolkit.slugify", "String {name}(", "slug")?;
    b.revise(
        PARAM,
        T,
        "TextToolkit.slugify",
        &[
            ("{name}(String input)", "{name}(String text)"),
            ("if (input == null)", "if (text == null)"),
            ("WHITESPACE.matcher(input)", "WHITESPACE.matcher(text)"),
        ],
    )?;
    Ok(())
}

fn date_utils(b: &mut PlanBuilder) -> Result<(), HistoryError> {
    const RENAME: &str = "REFACTOR: rename DateUtils.{from} to {to}";
    const PATTERN: &str = "REFACTOR: rename param pattern to fmt in {name}";

    b.rename(RENAME, D, "DateUtils.daysBetween", "long {name}(", "daysDiff")?;
    b.revise(
        "REFACTOR: rename params start,end to fromDate,toDate in {name}",
        D,
        "DateUtils.daysBetween",
        &[
            (
                "{name}(LocalDate start, LocalDate end)",
                "{name}(LocalDate fromDate, LocalDate toDate)",
            ),
            (
                "ChronoUnit.DAYS.between(start, end)",
                "ChronoUnit.DAYS.between(fromDate, toDate)",
            ),
        ],
    )?;
    b.rename(RENAME, D, "DateUtils.addDays", "LocalDate {name}(", "shiftDays")?;
    b.revise(
        "REFACTOR: rename param days to delta in {name}",
        D,
        "DateUtils.addDays",
        &[
            ("{name}(LocalDate date, int days)", "{name}(LocalDate date, int delta)"),
            ("date.plusDays(days)", "date.plusDays(delta)"),
        ],
    )?;
    b.rename(RENAME, D, "DateUtils.startOfWeek", "LocalDate {name}(", "weekStart")?;
    b.revise(
        "REFACTOR: rename param date to baseDate in {name}",
        D,
        "DateUtils.startOfWeek",
        &[
            ("{name}(LocalDate date)", "{name}(LocalDate baseDate)"),
            ("date.getDayOfWeek()", "baseDate.getDayOfWeek()"),
            ("return date.minusDays(diff);", "return baseDate.minusDays(diff);"),
        ],
    )?;
    b.rename(RENAME, D, "DateUtils.formatDate", "String {name}(", "format")?;
    b.revise(
        PATTERN,
        D,
        "DateUtils.formatDate",
        &[
            ("{name}(LocalDate date, String pattern)", "{name}(LocalDate date, String fmt)"),
            ("DateTimeFormatter.ofPattern(pattern)", "DateTimeFormatter.ofPattern(fmt)"),
        ],
    )?
    .with_mode(ReplaceMode::First);
    b.rename(RENAME, D, "DateUtils.parseDate", "LocalDate {name}(", "parse")?;
    b.revise(
        PATTERN,
        D,
        "DateUtils.parseDate",
        &[
            ("{name}(String text, String pattern)", "{name}(String text, String fmt)"),
            ("DateTimeFormatter.ofPattern(pattern)", "DateTimeFormatter.ofPattern(fmt)"),
        ],
    )?;
    Ok(())
}

fn collection_utils(b: &mut PlanBuilder) -> Result<(), HistoryError> {
    const RENAME: &str = "REFACTOR: rename CollectionUtils.{from} to {to}";
    const NUMBERS: &str = "REFACTOR: rename param numbers to values in {name}";

    b.rename(RENAME, L, "CollectionUtils.sum", "int {name}(List<Integer> numbers)", "sumValues")?;
    b.revise(
        NUMBERS,
        L,
        "CollectionUtils.sum",
        &[
            ("{name}(List<Integer> numbers)", "{name}(List<Integer> values)"),
            ("numbers == null", "values == null"),
            ("numbers.stream()", "values.stream()"),
        ],
    )?
    .with_mode(ReplaceMode::First);
    b.rename(RENAME, L, "CollectionUtils.max", "int {name}(List<Integer> numbers)", "maxValue")?;
    b.revise(
        NUMBERS,
        L,
        "CollectionUtils.max",
        &[
            ("{name}(List<Integer> numbers)", "{name}(List<Integer> values)"),
            ("numbers == null", "values == null"),
            ("numbers.isEmpty()", "values.isEmpty()"),
            ("numbers.stream()", "values.stream()"),
        ],
    )?;
    b.rename(RENAME, L, "CollectionUtils.distinct", "List<String> {name}(", "unique")?;
    b.revise(
        "REFACTOR: rename param values to items in {name}",
        L,
        "CollectionUtils.distinct",
        &[
            ("{name}(List<String> values)", "{name}(List<String> items)"),
            (
                "if (values == null) {\n            return List.of();",
                "if (items == null) {\n            return List.of();",
            ),
            ("for (String value : values)", "for (String value : items)"),
        ],
    )?;
    b.rename(RENAME, L, "CollectionUtils.merge", "List<String> {name}(", "mergeLists")?;
    b.revise(
        "REFACTOR: rename params first,second to left,right in {name}",
        L,
        "CollectionUtils.merge",
        &[
            (
                "{name}(List<String> first, List<String> second)",
                "{name}(List<String> left, List<String> right)",
            ),
            ("if (first != null)", "if (left != null)"),
            ("first)", "left)"),
            ("second != null", "right != null"),
            ("second)", "right)"),
        ],
    )?;
    b.rename(RENAME, L, "CollectionUtils.chunk", "List<List<T>> {name}(", "chunkBy")?;
    b.revise(
        "REFACTOR: rename param items to elements in {name}",
        L,
        "CollectionUtils.chunk",
        &[
            ("{name}(List<T> items, int size)", "{name}(List<T> elements, int size)"),
            ("if (items == null ||", "if (elements == null ||"),
            ("items.isEmpty()", "elements.isEmpty()"),
            ("items.size()", "elements.size()"),
            ("items.subList", "elements.subList"),
        ],
    )?;
    Ok(())
}

fn javadoc(b: &mut PlanBuilder) -> Result<(), HistoryError> {
    let summaries: [(&str, &str, &str, &str); 22] = [
        (C, "Calculator.add", "Adds two integers.", "Adds three integers."),
        (
            C,
            "Calculator.subtract",
            "Subtracts b from a.",
            "Subtracts with potential rounding drift.",
        ),
        (
            C,
            "Calculator.multiply",
            "Multiplies two integers.",
            "Multiplies values (docs stale).",
        ),
        (
            C,
            "Calculator.divide",
            "Divides dividend by divisor.",
            "Divides values with truncation (doc drift).",
        ),
        (
            C,
            "Calculator.modulo",
            "Computes the remainder of a divided by b.",
            "Computes remainder with legacy behavior.",
        ),
        (
            C,
            "Calculator.power",
            "Computes base raised to the given exponent.",
            "Computes power (doc not updated).",
        ),
        (
            C,
            "Calculator.average",
            "Computes the average of two integers using double precision.",
            "Computes mean but docs mention median.",
        ),
        (
            T,
            "TextToolkit.reverse",
            "Reverses the provided text.",
            "Reverses content with formatting loss (doc drift).",
        ),
        (
            T,
            "TextToolkit.toTitleCase",
            "Converts text to title case using the default locale.",
            "Converts text to sentence case (doc drift).",
        ),
        (
            T,
            "TextToolkit.isPalindrome",
            "Checks if the provided text is a palindrome.",
            "Checks if text is an anagram (doc drift).",
        ),
        (
            T,
            "TextToolkit.wordCount",
            "Counts the number of words in the text.",
            "Counts the number of characters (doc drift).",
        ),
        (
            T,
            "TextToolkit.slugify",
            "Generates a URL-friendly slug from the given input.",
            "Generates a slug but ignores whitespace (doc drift).",
        ),
        (
            D,
            "DateUtils.daysBetween",
            "Calculates the number of days between two dates.",
            "Calculates weeks between dates (doc drift).",
        ),
        (
            D,
            "DateUtils.addDays",
            "Adds days to the provided date.",
            "Subtracts days per docs (drift).",
        ),
        (
            D,
            "DateUtils.startOfWeek",
            "Returns the Monday of the week containing the provided date.",
            "Returns Sunday as start (doc drift).",
        ),
        (
            D,
            "DateUtils.formatDate",
            "Formats a date using the given pattern.",
            "Formats date using ISO only (doc drift).",
        ),
        (
            D,
            "DateUtils.parseDate",
            "Parses a date string using the given pattern.",
            "Parses date assuming UTC only (doc drift).",
        ),
        (
            L,
            "CollectionUtils.sum",
            "Sums the integers in the list.",
            "Sums and divides by length (doc drift).",
        ),
        (
            L,
            "CollectionUtils.max",
            "Returns the maximum integer in the list.",
            "Returns minimum per docs (drift).",
        ),
        (
            L,
            "CollectionUtils.distinct",
            "Returns distinct elements while preserving insertion order.",
            "Returns sorted distinct elements (doc drift).",
        ),
        (
            L,
            "CollectionUtils.merge",
            "Merges two lists into a new list.",
            "Interleaves lists (doc drift).",
        ),
        (
            L,
            "CollectionUtils.chunk",
            "Splits a list into chunks of the given size.",
            "Splits list into pairs only (doc drift).",
        ),
    ];
    for (file, symbol, search, replace) in summaries {
        b.document(DRIFT, file, symbol, &[(search, replace)])?;
    }

    b.document(
        DRIFT_PARAMS,
        C,
        "Calculator.add",
        &[
            ("@param a first addend", "@param a first addend (doc drift order)"),
            ("@param b second addend", "@param b second addend (doc drift order)"),
        ],
    )?;
    b.document(
        DRIFT_PARAMS,
        C,
        "Calculator.divide",
        &[
            ("@param dividend dividend value", "@param dividend dividend value (doc drift)"),
            ("@param divisor divisor value", "@param divisor divisor value (doc drift)"),
        ],
    )?;
    b.document(
        DRIFT_PARAMS,
        D,
        "DateUtils.daysBetween",
        &[
            ("@param start start date inclusive", "@param start start date inclusive (doc drift)"),
            ("@param end end date exclusive", "@param end end date exclusive (doc drift)"),
        ],
    )?;
    Ok(())
}
