fn main() {
    cellmetric_tasks::entry_points::cellmetric();
}
