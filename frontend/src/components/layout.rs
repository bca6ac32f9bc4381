use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum StackDirection {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Properties, PartialEq)]
pub struct StackProps {
    #[prop_or_default]
    pub direction: StackDirection,
    /// Gap in rem.
    #[prop_or(1.0)]
    pub gap: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Stack)]
pub fn stack(props: &StackProps) -> Html {
    let flow = match props.direction {
        StackDirection::Vertical => "column",
        StackDirection::Horizontal => "row",
    };
    let style = format!("display: flex; flex-direction: {}; gap: {}rem;", flow, props.gap);

    html! {
        <div class={classes!("stack", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GridProps {
    #[prop_or(3)]
    pub columns: u32,
    #[prop_or(1.5)]
    pub gap: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Responsive grid; collapses to one column on narrow screens via `.grid`.
#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let style = format!(
        "--grid-columns: {}; gap: {}rem;",
        props.columns.max(1),
        props.gap
    );

    html! {
        <div class={classes!("grid", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}
