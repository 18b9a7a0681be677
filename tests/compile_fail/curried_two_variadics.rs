use curryfn::curried;

curried! {
    fn merge(...left: Vec<i32>, ...optional_args: Vec<i32>) -> usize {
        left.len() + optional_args.len()
    }
}

fn main() {}
