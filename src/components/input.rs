use yew::prelude::*;

/// Classes every `Input` starts from. Caller classes come after these; a
/// caller class already in this list is not repeated.
pub const INPUT_BASE_CLASSES: &str = "flex h-10 w-full rounded-md border border-input \
    bg-background px-3 py-2 text-sm ring-offset-background file:border-0 \
    file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
    focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Attributes forwarded as-is to the rendered `<input>`. Anything left
/// unset is not rendered.
#[derive(Properties, PartialEq, Clone, Default)]
pub struct InputProps {
    #[prop_or_default]
    pub class: Classes,
    /// Attached to the native `<input>` element.
    #[prop_or_default]
    pub node_ref: NodeRef,

    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Rendered as the `type` attribute.
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub minlength: Option<AttrValue>,
    #[prop_or_default]
    pub maxlength: Option<AttrValue>,
    #[prop_or_default]
    pub pattern: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_describedby: Option<AttrValue>,
    #[prop_or_default]
    pub aria_invalid: Option<AttrValue>,

    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub autofocus: bool,

    #[prop_or_default]
    pub oninput: Option<Callback<InputEvent>>,
    #[prop_or_default]
    pub onchange: Option<Callback<Event>>,
    #[prop_or_default]
    pub onfocus: Option<Callback<FocusEvent>>,
    #[prop_or_default]
    pub onblur: Option<Callback<FocusEvent>>,
    #[prop_or_default]
    pub onkeydown: Option<Callback<KeyboardEvent>>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    html! {
        <input
            ref={props.node_ref.clone()}
            class={classes!(INPUT_BASE_CLASSES, props.class.clone())}
            type={props.input_type.clone()}
            id={props.id.clone()}
            name={props.name.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            autocomplete={props.autocomplete.clone()}
            min={props.min.clone()}
            max={props.max.clone()}
            step={props.step.clone()}
            minlength={props.minlength.clone()}
            maxlength={props.maxlength.clone()}
            pattern={props.pattern.clone()}
            title={props.title.clone()}
            aria-label={props.aria_label.clone()}
            aria-describedby={props.aria_describedby.clone()}
            aria-invalid={props.aria_invalid.clone()}
            disabled={props.disabled}
            readonly={props.readonly}
            required={props.required}
            autofocus={props.autofocus}
            oninput={props.oninput.clone()}
            onchange={props.onchange.clone()}
            onfocus={props.onfocus.clone()}
            onblur={props.onblur.clone()}
            onkeydown={props.onkeydown.clone()}
        />
    }
}
