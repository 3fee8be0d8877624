use calcdrill::generate_easy_problem;

fn main() {
    for i in 1..=5 {
        match generate_easy_problem() {
            Ok(q) => {
                println!("problem {i} ({}):", q.meta.template());
                println!("  integrand: {}", q.integrand_tex);
                println!("  solution:  {}", q.solution_tex);
                println!("  evaluable: {} = {}", q.integrand_plain, q.solution_plain);
            }
            Err(err) => eprintln!("generation failed: {err}"),
        }
    }
}
