use curryfn::curried;

curried! {
    fn scale_all(...values: Vec<i32>, factor: i32) -> Vec<i32> {
        values.into_iter().map(|value| value * factor).collect()
    }
}

fn main() {}
