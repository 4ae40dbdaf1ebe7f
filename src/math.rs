/// Implementation of the Kahan-Babushka-Neumaier algorithm for reduced numerical error in summation
///
/// <https://en.wikipedia.org/wiki/Kahan_summation_algorithm#Further_enhancements>
pub fn kbn_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.;
    let mut compensation = 0.;
    for input in values {
        let t = sum + input;
        compensation += if sum.abs() >= input.abs() {
            (sum - t) + input
        } else {
            (input - t) + sum
        };
        sum = t;
    }
    sum + compensation
}
