//! Built-in SVG page with `{{PLACEHOLDER}}` markers.

pub const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{PAGE_WIDTH}}" height="{{PAGE_HEIGHT}}" font-family="sans-serif" font-size="12">
<g id="trail" style="visibility:{{TRAIL_VISIBILITY}}">
{{TRAIL}}</g>
<g id="container" transform="translate({{CENTER_X}},{{CENTER_Y}})">
<circle r="{{RADIUS}}" style="opacity:0"/>
{{SUNBURST}}{{EXPLANATION}}</g>
<g id="legend" transform="translate({{LEGEND_X}},{{TRAIL_HEIGHT}})">
{{LEGEND}}</g>
</svg>
"##;

pub fn template() -> &'static str {
    TEMPLATE
}
