/// Shares x-axis zoom and pan across the `.time-series` charts.
///
/// Relayouts issued while propagating are ignored, otherwise every chart
/// would echo the change back to the others.
pub(crate) const SYNC_ZOOM_SCRIPT: &str = r#"
(function() {
    var charts = Array.prototype.slice.call(document.querySelectorAll('.time-series'));
    var syncing = false;

    charts.forEach(function(source) {
        source.on('plotly_relayout', function(event) {
            if (syncing) {
                return;
            }

            var update = {};
            if (event['xaxis.autorange']) {
                update['xaxis.autorange'] = true;
            } else if (event['xaxis.range[0]'] !== undefined) {
                update['xaxis.range'] = [event['xaxis.range[0]'], event['xaxis.range[1]']];
            } else if (event['xaxis.range'] !== undefined) {
                update['xaxis.range'] = event['xaxis.range'];
            } else {
                return;
            }

            syncing = true;
            var pending = charts
                .filter(function(target) { return target !== source; })
                .map(function(target) { return Plotly.relayout(target, update); });

            Promise.all(pending).then(
                function() { syncing = false; },
                function() { syncing = false; }
            );
        });
    });
})();
"#;
