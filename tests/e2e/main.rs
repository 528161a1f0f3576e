// End-to-end tests for the Author API
//
// Each test spawns the real axum router on an OS-assigned port, backed by the
// in-memory author store, and drives it over plain HTTP. Tests are fully
// isolated (one server and one store per test) and run in parallel.

mod test_health;
