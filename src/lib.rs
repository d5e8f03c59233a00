pub mod math {
    pub mod integration {
        pub mod intervalpartition;
        pub mod quadratureengine;
        pub mod simpsonrule;
        pub mod trapezoidrule;
        pub mod quadraturerule;
        pub mod integrationcalculator;
    }
}

pub mod samplefunction;

mod proptests;
