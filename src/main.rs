fn main() {
    domainscan::app::startup::startup();
}
